use std::path::Path;

use crate::document::line_ending;
use crate::errors::MergeError;
use crate::file_utils::FileManager;
use crate::merge::MergePlan;
use crate::reporter::{Notice, Reporter};

// @module: Assembly and output of the merged document

/// Accumulates output lines. A line missing its terminator gets a `\n`
/// once another line follows it. Blank lines reuse the previous line's terminator.
#[derive(Debug, Default)]
struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    fn push_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    fn blank_line(&mut self) {
        let ending = match line_ending(&self.text) {
            "" => "\n",
            ending => ending,
        };
        self.push_line(ending);
    }
}

/// Render the merged document as text
pub fn render(plan: &MergePlan) -> String {
    let mut out = OutputBuffer::default();

    if let Some(script_info) = &plan.script_info {
        out.push_lines(script_info);
        out.blank_line();
    }

    out.push_lines(&plan.styles.header);
    out.push_lines(&plan.styles.base_styles);
    out.push_lines(&plan.styles.appended_styles);
    out.blank_line();

    out.push_lines(&plan.events.header);
    out.push_lines(&plan.events.base_events);
    out.push_lines(&plan.events.appended_events);

    out.text
}

/// Render the plan and write it to `path` as UTF-8 without a byte order mark
pub fn write_merged<P: AsRef<Path>>(
    plan: &MergePlan,
    path: P,
    reporter: &mut dyn Reporter,
) -> Result<(), MergeError> {
    let path = path.as_ref();
    reporter.notice(Notice::Writing { path: path.to_path_buf() });

    FileManager::write_to_file(path, &render(plan))?;

    reporter.notice(Notice::Completed { path: path.to_path_buf() });
    Ok(())
}
