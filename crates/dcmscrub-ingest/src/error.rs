//! Error types for folder discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while walking a DICOM folder tree.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The root path does not point at a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The root directory could not be listed.
    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, IngestError>;
