use std::fs;
use std::io;
use std::path::Path;

use crate::errors::MergeError;

// @module: File reading and writing for subtitle documents

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Path names an existing regular file
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a subtitle file as UTF-8 text. A byte order mark is left for the parser.
    pub fn read_subtitle<P: AsRef<Path>>(path: P) -> Result<String, MergeError> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(MergeError::FileNotFound { path: path.to_path_buf() });
        }

        let bytes = fs::read(path).map_err(|e| MergeError::read(path, e))?;
        String::from_utf8(bytes)
            .map_err(|e| MergeError::read(path, io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write a string to a file, creating missing parent directories
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), MergeError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent).map_err(|e| MergeError::write(path, e))?;
        }

        fs::write(path, content).map_err(|e| MergeError::write(path, e))
    }
}
