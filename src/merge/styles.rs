use std::collections::{HashMap, HashSet};

use crate::document::Section;
use crate::reporter::{Notice, Reporter};

// @module: Style section merging and collision renaming

const STYLE_PREFIX: &str = "Style:";

/// Whether a trimmed line is a style definition
pub fn is_style_line(trimmed: &str) -> bool {
    trimmed.starts_with(STYLE_PREFIX)
}

// @struct: One `Style:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    // @field: First field, trimmed
    pub name: String,

    // @field: Comma-separated fields after the prefix, untrimmed
    pub raw_fields: Vec<String>,
}

impl StyleDefinition {
    /// Parse a raw style line. Returns `None` for lines that are not style definitions.
    pub fn parse(line: &str) -> Option<Self> {
        if !is_style_line(line.trim()) {
            return None;
        }
        let (_, data) = line.split_once(':')?;
        let raw_fields: Vec<String> = data.split(',').map(str::to_string).collect();
        let name = raw_fields.first().map(|f| f.trim().to_string()).unwrap_or_default();
        Some(StyleDefinition { name, raw_fields })
    }

    /// Rebuild the line with a new name. The remaining fields, including the
    /// original line terminator carried by the last one, are left untouched.
    pub fn to_line_with_name(&self, new_name: &str) -> String {
        let mut fields = self.raw_fields.clone();
        if let Some(first) = fields.first_mut() {
            *first = format!(" {}", new_name);
        }
        format!("{}{}", STYLE_PREFIX, fields.join(","))
    }
}

/// Original second-file style name to its replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMap {
    renames: HashMap<String, String>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, original: impl Into<String>, renamed: impl Into<String>) {
        self.renames.insert(original.into(), renamed.into());
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.renames.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

/// Result of merging two style sections
#[derive(Debug, Clone, Default)]
pub struct StyleMerge {
    /// Non-style lines of the first file's section (header, Format, comments, blanks)
    pub header: Vec<String>,
    /// The first file's style lines, verbatim
    pub base_styles: Vec<String>,
    /// The second file's style lines, renamed where they collided
    pub appended_styles: Vec<String>,
    pub renames: RenameMap,
}

/// First `<name>_<n>` with `n >= 2` not taken by the base file
pub fn unique_name(original: &str, taken: &HashSet<&str>) -> String {
    let mut suffix = 2u32;
    loop {
        let candidate = format!("{}_{}", original, suffix);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Merge the second file's styles into the first file's.
///
/// Only the first file's names are protected: candidates are checked against
/// them alone, never against names already handed out to the second file.
pub fn merge_styles(base: &Section, incoming: &Section, reporter: &mut dyn Reporter) -> StyleMerge {
    let (base_styles, header) = base.partition(is_style_line);
    let (incoming_styles, _) = incoming.partition(is_style_line);

    let base_definitions: Vec<StyleDefinition> =
        base_styles.iter().filter_map(|line| StyleDefinition::parse(line)).collect();
    let taken: HashSet<&str> = base_definitions.iter().map(|d| d.name.as_str()).collect();

    let mut renames = RenameMap::new();
    let mut appended_styles = Vec::with_capacity(incoming_styles.len());

    for line in incoming_styles {
        let Some(definition) = StyleDefinition::parse(line) else {
            appended_styles.push(line.to_string());
            continue;
        };

        if !taken.contains(definition.name.as_str()) {
            appended_styles.push(line.to_string());
            continue;
        }

        let renamed = unique_name(&definition.name, &taken);
        reporter.notice(Notice::StyleRenamed {
            original: definition.name.clone(),
            renamed: renamed.clone(),
        });
        appended_styles.push(definition.to_line_with_name(&renamed));
        renames.insert(definition.name, renamed);
    }

    StyleMerge {
        header: header.into_iter().map(str::to_string).collect(),
        base_styles: base_styles.into_iter().map(str::to_string).collect(),
        appended_styles,
        renames,
    }
}
