/*!
 * Error types for the assmerge application.
 *
 * Every failure the merge can hit is fatal: missing inputs, unreadable inputs,
 * structurally incomplete documents and output write failures. They are defined
 * here with thiserror so the binary can report them with a single message.
 */

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a parsed document lacks the structure a merge requires
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A required section header never appeared in the document
    #[error("'{file}' has no {section} section")]
    MissingSection {
        /// Section header, brackets included
        section: String,
        /// Display name of the offending input
        file: String,
    },

    /// The events section has no `Format:` line
    #[error("the [Events] section of '{file}' has no Format line")]
    MissingEventFormat {
        /// Display name of the offending input
        file: String,
    },

    /// The events `Format:` line has no field named `Style`
    #[error("the [Events] Format line of '{file}' has no Style field")]
    MissingStyleField {
        /// Display name of the offending input
        file: String,
    },
}

/// Main error type for a merge run
#[derive(Error, Debug)]
pub enum MergeError {
    /// An input path does not exist
    #[error("input file '{}' does not exist", path.display())]
    FileNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// An input exists but could not be read or decoded
    #[error("failed to read '{}': {source}", path.display())]
    ReadError {
        /// The unreadable path
        path: PathBuf,
        /// Underlying I/O or decoding failure
        #[source]
        source: io::Error,
    },

    /// A required section or field is missing
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),

    /// The merged output could not be written
    #[error("failed to write '{}': {source}", path.display())]
    WriteError {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Build a read error for the given input
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadError { path: path.into(), source }
    }

    /// Build a write error for the given destination
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteError { path: path.into(), source }
    }
}
