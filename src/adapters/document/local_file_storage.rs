//! Local filesystem storage for exported documents.

use std::fs;
use std::path::PathBuf;

use crate::ports::{DocumentFileStorage, ExportError};

/// Stores rendered documents under a base directory.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
}

impl LocalFileStorage {
    /// Creates storage rooted at `base_dir`. The directory is created on
    /// first save.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the storage root.
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn validate_filename(filename: &str) -> Result<(), ExportError> {
        if filename.is_empty() {
            return Err(ExportError::invalid_filename(filename, "empty name"));
        }
        if filename.contains('/') || filename.contains('\\') {
            return Err(ExportError::invalid_filename(
                filename,
                "path separators are not allowed",
            ));
        }
        if filename == "." || filename == ".." {
            return Err(ExportError::invalid_filename(
                filename,
                "relative path components are not allowed",
            ));
        }
        Ok(())
    }
}

impl DocumentFileStorage for LocalFileStorage {
    fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
        Self::validate_filename(filename)?;
        fs::create_dir_all(&self.base_dir)?;
        let path = self.base_dir.join(filename);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
