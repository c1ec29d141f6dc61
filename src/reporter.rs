use log::{info, warn};
use std::fmt;
use std::path::PathBuf;

// @module: User-facing progress and rename notices

/// A status message produced by one of the merge stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Both inputs are about to be parsed
    ParsingStarted,
    /// Style sections are being merged
    MergingStyles,
    /// A second-file style collided and was renamed
    StyleRenamed {
        original: String,
        renamed: String,
    },
    /// Event sections are being merged
    MergingEvents,
    /// A second-file event had too few fields to carry a style
    EventTooShort {
        line: String,
    },
    /// The merged document is being written
    Writing {
        path: PathBuf,
    },
    /// The merged document was written successfully
    Completed {
        path: PathBuf,
    },
}

impl Notice {
    /// Whether this notice reports something the user should double check
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EventTooShort { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParsingStarted => write!(f, "Parsing input files..."),
            Self::MergingStyles => write!(f, "Merging styles..."),
            Self::StyleRenamed { original, renamed } => {
                write!(f, "Style conflict: '{}' renamed to '{}'", original, renamed)
            }
            Self::MergingEvents => write!(f, "Merging events..."),
            Self::EventTooShort { line } => {
                write!(f, "Event has no style field, kept as is: {}", line.trim_end())
            }
            Self::Writing { path } => write!(f, "Writing merged file to '{}'...", path.display()),
            Self::Completed { path } => write!(f, "Merge complete! Output file: '{}'", path.display()),
        }
    }
}

/// Sink for notices emitted while merging
pub trait Reporter {
    fn notice(&mut self, notice: Notice);
}

/// Forwards notices to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn notice(&mut self, notice: Notice) {
        if notice.is_warning() {
            warn!("{}", notice);
        } else {
            info!("{}", notice);
        }
    }
}

/// Keeps every notice in memory, in emission order
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub notices: Vec<Notice>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename notices as `(original, renamed)` pairs
    pub fn renames(&self) -> Vec<(&str, &str)> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::StyleRenamed { original, renamed } => Some((original.as_str(), renamed.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
