//! Core scrubbing pipeline for DICOM series folders.
//!
//! The pipeline runs in two passes over each directory group:
//! 1. **Scan**: read series identifier and instance number from every
//!    candidate file and group the files into [`SeriesRecord`]s.
//! 2. **Reconstruct**: for every index in a series' contiguous range,
//!    re-read the slice, strip identifying and private attributes,
//!    replace the pixel buffer with a synthetic stripe pattern, and
//!    write the result to a series-qualified output directory.

pub mod deident;
pub mod error;
pub mod reconstruct;
pub mod series;
pub mod stripe;

pub use deident::{IDENTIFYING_FIELDS, strip_identifying_fields, strip_private_tags};
pub use error::{Result, ScrubError};
pub use reconstruct::reconstruct_series;
pub use series::{SeriesMap, SeriesRecord, scan_group};
pub use stripe::{StripePattern, generate_stripe};
