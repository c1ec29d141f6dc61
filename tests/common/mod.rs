/*!
 * Common test utilities for the assmerge test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, Bold, Italic, Alignment, MarginL, MarginR, MarginV, Encoding";
pub const EVENT_FORMAT: &str = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A style line with the given name and font
pub fn style(name: &str, font: &str) -> String {
    format!("Style: {},{},20,&H00FFFFFF,0,0,2,10,10,10,1", name, font)
}

/// A dialogue line using the given style
pub fn dialogue(style: &str, text: &str) -> String {
    format!("Dialogue: 0,0:00:01.00,0:00:02.00,{},,0,0,0,,{}", style, text)
}

/// Builds a complete ASS document with `\n` line endings
pub fn sample_ass(title: &str, styles: &[String], events: &[String]) -> String {
    let mut text = format!("[Script Info]\nTitle: {}\nScriptType: v4.00+\n\n", title);
    text.push_str("[V4+ Styles]\n");
    text.push_str(STYLE_FORMAT);
    text.push('\n');
    for line in styles {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("\n[Events]\n");
    text.push_str(EVENT_FORMAT);
    text.push('\n');
    for line in events {
        text.push_str(line);
        text.push('\n');
    }
    text
}
