//! Document File Storage Port - saving rendered documents.

use std::path::PathBuf;
use thiserror::Error;

/// Port for storing a rendered document under its export filename.
pub trait DocumentFileStorage: Send + Sync {
    /// Saves the contents under `filename` and returns the stored path.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidFilename` for names that escape the
    /// storage root, or `ExportError::Io` for filesystem failures.
    fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Errors that can occur while storing a document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The filename is empty or would escape the storage root.
    #[error("Invalid export filename '{name}': {reason}")]
    InvalidFilename { name: String, reason: String },

    /// Underlying filesystem failure.
    #[error("Failed to store document: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Creates an invalid filename error.
    pub fn invalid_filename(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilename {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filename_displays_name_and_reason() {
        let err = ExportError::invalid_filename("../escape.md", "path traversal");
        let text = err.to_string();
        assert!(text.contains("../escape.md"));
        assert!(text.contains("path traversal"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
