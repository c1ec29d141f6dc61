/*!
 * Merging of two parsed subtitle documents.
 *
 * - `styles`: style extraction, collision detection and renaming
 * - `events`: event extraction and style reference rewriting
 *
 * `MergePlan` ties both together after checking that each document carries
 * the sections the merge needs.
 */

pub mod events;
pub mod styles;

pub use events::{EventFormat, EventMerge, EventRecord, merge_events};
pub use styles::{RenameMap, StyleDefinition, StyleMerge, merge_styles};

use crate::document::{Document, EVENTS, SCRIPT_INFO, STYLES, Section};
use crate::errors::StructuralError;
use crate::reporter::{Notice, Reporter};

/// Everything the writer needs to emit the merged document
#[derive(Debug, Clone)]
pub struct MergePlan {
    /// The first file's `[Script Info]` lines, when it has that section
    pub script_info: Option<Vec<String>>,
    pub styles: StyleMerge,
    pub events: EventMerge,
}

fn require<'a>(doc: &'a Document, section: &str, file: &str) -> Result<&'a Section, StructuralError> {
    doc.get(section).ok_or_else(|| StructuralError::MissingSection {
        section: section.to_string(),
        file: file.to_string(),
    })
}

impl MergePlan {
    /// Merge `second` into `first`. The labels name the inputs in error messages.
    ///
    /// All structural checks run before any merging, so a failed plan
    /// reports no renames.
    pub fn build(
        first: &Document,
        first_label: &str,
        second: &Document,
        second_label: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<Self, StructuralError> {
        let base_styles = require(first, STYLES, first_label)?;
        let base_events = require(first, EVENTS, first_label)?;
        let incoming_styles = require(second, STYLES, second_label)?;
        let incoming_events = require(second, EVENTS, second_label)?;
        let format = EventFormat::from_section(base_events, first_label)?;

        reporter.notice(Notice::MergingStyles);
        let styles = merge_styles(base_styles, incoming_styles, reporter);

        reporter.notice(Notice::MergingEvents);
        let events = merge_events(base_events, incoming_events, &format, &styles.renames, reporter);

        let script_info = first.get(SCRIPT_INFO).map(|section| section.lines().to_vec());

        Ok(MergePlan {
            script_info,
            styles,
            events,
        })
    }

    pub fn renames(&self) -> &RenameMap {
        &self.styles.renames
    }
}
