//! Error types for scanning and reconstruction.

use std::path::PathBuf;

use dicom::core::value::ConvertValueError;
use thiserror::Error;

/// Errors that can occur while scanning or reconstructing a series.
///
/// Nothing is recovered locally; every variant aborts the run.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// A candidate file could not be parsed as DICOM.
    #[error("failed to read DICOM file {path}")]
    ReadFile {
        path: PathBuf,
        source: dicom::object::ReadError,
    },

    /// A required attribute is absent from the data set.
    #[error("{path} has no {keyword} attribute")]
    MissingAttribute {
        keyword: &'static str,
        path: PathBuf,
    },

    /// An attribute value could not be converted to the expected type.
    #[error("invalid {keyword} value in {path}")]
    ConvertValue {
        keyword: &'static str,
        path: PathBuf,
        source: ConvertValueError,
    },

    /// A series' index range has a hole: no file was registered at `index`.
    #[error("missing slice {index} in series {series_uid}")]
    MissingSlice { series_uid: String, index: i32 },

    /// Pixel data is absent or could not be decoded.
    #[error("failed to decode pixel data in {path}")]
    PixelData {
        path: PathBuf,
        source: dicom::pixeldata::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A reconstructed slice could not be written.
    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        source: dicom::object::WriteError,
    },
}

/// Result type alias for scrubbing operations.
pub type Result<T> = std::result::Result<T, ScrubError>;
