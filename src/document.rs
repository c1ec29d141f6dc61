use std::collections::HashMap;

// @module: Sectioned parsing of ASS subtitle text

/// Header of the script metadata section
pub const SCRIPT_INFO: &str = "[Script Info]";
/// Header of the style definitions section
pub const STYLES: &str = "[V4+ Styles]";
/// Header of the dialogue/comment events section
pub const EVENTS: &str = "[Events]";

const BOM: char = '\u{FEFF}';

/// Remove a leading byte order mark, if any
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// The terminator a raw line ends with: `\r\n`, `\n` or nothing
pub fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

// @struct: One bracket-headed block of a subtitle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    // @field: Header token, e.g. "[Events]"
    name: String,

    // @field: Raw lines, header first, terminators kept
    lines: Vec<String>,
}

impl Section {
    fn open(name: String, header_line: &str) -> Self {
        Section {
            name,
            lines: vec![header_line.to_string()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All lines of the section, starting with the header line
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Splits the section into lines whose trimmed form matches `is_record`
    /// and everything else (header, Format line, comments, blanks).
    /// Both halves keep their original relative order.
    pub fn partition<F>(&self, is_record: F) -> (Vec<&str>, Vec<&str>)
    where
        F: Fn(&str) -> bool,
    {
        let mut records = Vec::new();
        let mut rest = Vec::new();
        for line in &self.lines {
            if is_record(line.trim()) {
                records.push(line.as_str());
            } else {
                rest.push(line.as_str());
            }
        }
        (records, rest)
    }

    /// First line whose trimmed form starts with `prefix`
    pub fn find_line(&self, prefix: &str) -> Option<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .find(|line| line.trim().starts_with(prefix))
    }
}

/// A parsed subtitle file: section name to section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: HashMap<String, Section>,
    order: Vec<String>,
}

impl Document {
    /// Parse the full text of a subtitle file.
    ///
    /// A line whose trimmed form is wrapped in `[` `]` opens a new section.
    /// Lines before the first header belong to no section and are dropped.
    /// A repeated header starts its section over, keeping its first position.
    pub fn parse(text: &str) -> Self {
        let mut doc = Document::default();
        let mut current: Option<String> = None;

        for line in strip_bom(text).split_inclusive('\n') {
            let trimmed = line.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                let name = trimmed.to_string();
                if !doc.sections.contains_key(&name) {
                    doc.order.push(name.clone());
                }
                doc.sections.insert(name.clone(), Section::open(name.clone(), line));
                current = Some(name);
            } else if let Some(section) = current.as_ref().and_then(|name| doc.sections.get_mut(name)) {
                section.lines.push(line.to_string());
            }
        }

        doc
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in the order they first appeared
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
