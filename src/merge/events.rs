use crate::document::{Section, line_ending};
use crate::errors::StructuralError;
use crate::merge::styles::RenameMap;
use crate::reporter::{Notice, Reporter};

// @module: Event section merging and style reference rewriting

const EVENT_PREFIXES: [&str; 2] = ["Dialogue:", "Comment:"];
const FORMAT_PREFIX: &str = "Format:";
const STYLE_FIELD: &str = "Style";

/// Whether a trimmed line is a dialogue or comment event
pub fn is_event_line(trimmed: &str) -> bool {
    EVENT_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Field layout declared by an `[Events]` section's `Format:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormat {
    pub fields: Vec<String>,
    pub style_index: usize,
}

impl EventFormat {
    /// Parse the text of a `Format:` line. Returns `None` when it has no `Style` field.
    pub fn parse(line: &str) -> Option<Self> {
        let (_, data) = line.split_once(':')?;
        let fields: Vec<String> = data.split(',').map(|f| f.trim().to_string()).collect();
        let style_index = fields.iter().position(|f| f == STYLE_FIELD)?;
        Some(EventFormat { fields, style_index })
    }

    /// Locate and parse the `Format:` line of an events section
    pub fn from_section(section: &Section, file: &str) -> Result<Self, StructuralError> {
        let line = section
            .find_line(FORMAT_PREFIX)
            .ok_or_else(|| StructuralError::MissingEventFormat { file: file.to_string() })?;
        Self::parse(line).ok_or_else(|| StructuralError::MissingStyleField { file: file.to_string() })
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

// @struct: One `Dialogue:` or `Comment:` line split by its format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    // @field: Text before the first colon, kept verbatim
    pub kind: String,

    // @field: At most `field_count` parts; the last one keeps any commas
    pub fields: Vec<String>,
}

impl EventRecord {
    pub fn parse(line: &str, format: &EventFormat) -> Option<Self> {
        let (kind, data) = line.split_once(':')?;
        let fields = data
            .splitn(format.field_count().max(1), ',')
            .map(str::to_string)
            .collect();
        Some(EventRecord {
            kind: kind.to_string(),
            fields,
        })
    }

    /// The style field, trimmed
    pub fn style_ref(&self, format: &EventFormat) -> Option<&str> {
        self.fields.get(format.style_index).map(|f| f.trim())
    }

    /// Replace the style field. A line terminator carried by the field is kept.
    pub fn set_style_ref(&mut self, format: &EventFormat, style: &str) {
        if let Some(field) = self.fields.get_mut(format.style_index) {
            *field = format!("{}{}", style, line_ending(field));
        }
    }

    pub fn to_line(&self) -> String {
        format!("{}:{}", self.kind, self.fields.join(","))
    }
}

/// Result of merging two event sections
#[derive(Debug, Clone, Default)]
pub struct EventMerge {
    /// Non-event lines of the first file's section
    pub header: Vec<String>,
    /// The first file's event lines, verbatim
    pub base_events: Vec<String>,
    /// The second file's event lines with renamed styles applied
    pub appended_events: Vec<String>,
    /// How many second-file events had their style rewritten
    pub rewritten: usize,
}

/// Rewrite one second-file event line. Lines whose style was not renamed
/// come back untouched.
pub fn rewrite_event(
    line: &str,
    format: &EventFormat,
    renames: &RenameMap,
    reporter: &mut dyn Reporter,
) -> Option<String> {
    let mut record = EventRecord::parse(line, format)?;
    let Some(style) = record.style_ref(format) else {
        reporter.notice(Notice::EventTooShort { line: line.to_string() });
        return None;
    };
    let renamed = renames.get(style)?.to_string();
    record.set_style_ref(format, &renamed);
    Some(record.to_line())
}

/// Merge the second file's events after the first file's, following the
/// first file's `Format:` line for both.
pub fn merge_events(
    base: &Section,
    incoming: &Section,
    format: &EventFormat,
    renames: &RenameMap,
    reporter: &mut dyn Reporter,
) -> EventMerge {
    let (base_events, header) = base.partition(is_event_line);
    let (incoming_events, _) = incoming.partition(is_event_line);

    let mut rewritten = 0;
    let mut appended_events = Vec::with_capacity(incoming_events.len());
    for line in incoming_events {
        match rewrite_event(line, format, renames, reporter) {
            Some(updated) => {
                rewritten += 1;
                appended_events.push(updated);
            }
            None => appended_events.push(line.to_string()),
        }
    }

    EventMerge {
        header: header.into_iter().map(str::to_string).collect(),
        base_events: base_events.into_iter().map(str::to_string).collect(),
        appended_events,
        rewritten,
    }
}
