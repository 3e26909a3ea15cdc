//! Discovery of DICOM series folders.
//!
//! Walks a root directory depth-first and produces one [`DirectoryGroup`]
//! per directory visited, filtering out entries that can never hold slice
//! data (hidden files, spreadsheets, archive indexes and the like).

pub mod error;
pub mod walk;

pub use error::{IngestError, Result};
pub use walk::{DirectoryGroup, walk_tree};
