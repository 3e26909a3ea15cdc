use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one scrub run.
#[derive(Debug)]
pub struct ScrubResult {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub directories: usize,
    pub series: Vec<SeriesSummary>,
    pub files_written: usize,
    pub elapsed: Duration,
}

/// Per-series reporting row for the end-of-run summary.
#[derive(Debug)]
pub struct SeriesSummary {
    pub series_uid: String,
    pub directory: PathBuf,
    pub slices: usize,
    pub range: Option<(i32, i32)>,
    pub written: usize,
}
