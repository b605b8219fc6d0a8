//! File-save seam.
//!
//! Stands in for the browser-download capability: given a binary payload and
//! a filename, make the file land on the operator's machine. The console
//! only ever calls this from the project export flow.

use crate::errors::MocktowerError;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to save {filename}: {message}")]
    WriteFailed { filename: String, message: String },
}

impl MocktowerError for SaveError {
    fn error_code(&self) -> &'static str {
        match self {
            SaveError::WriteFailed { .. } => "FILE_SAVE_FAILED",
        }
    }
}

/// File-save collaborator.
pub trait FileSaver {
    fn save(&self, filename: &str, payload: &[u8]) -> Result<(), SaveError>;
}

/// [`FileSaver`] that writes into a directory on the local filesystem.
///
/// Suitable for a desktop embedding; a browser embedding supplies its own
/// implementation.
pub struct DirectoryFileSaver {
    directory: std::path::PathBuf,
}

impl DirectoryFileSaver {
    pub fn new(directory: std::path::PathBuf) -> Self {
        Self { directory }
    }
}

impl FileSaver for DirectoryFileSaver {
    fn save(&self, filename: &str, payload: &[u8]) -> Result<(), SaveError> {
        let path = self.directory.join(filename);
        std::fs::write(&path, payload).map_err(|e| {
            tracing::error!(
                event = "core.files.save_failed",
                path = %path.display(),
                error = %e
            );
            SaveError::WriteFailed {
                filename: filename.to_string(),
                message: e.to_string(),
            }
        })
    }
}
