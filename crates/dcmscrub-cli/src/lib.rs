//! CLI library components for the DICOM folder scrubber.

pub mod logging;
