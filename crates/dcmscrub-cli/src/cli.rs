//! CLI argument definitions for the DICOM folder scrubber.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dcmscrub",
    version,
    about = "Anonymize a folder tree of DICOM files",
    long_about = "Walk a folder tree of DICOM files, group them into series,\n\
                  strip identifying and private attributes, and replace pixel\n\
                  content with a synthetic stripe pattern.\n\n\
                  Scrubbed slices are written per series under the output\n\
                  directory; existing files are overwritten."
)]
pub struct Cli {
    /// Root folder containing DICOM series (searched recursively).
    #[arg(value_name = "DICOM_FOLDER")]
    pub dicom_folder: PathBuf,

    /// Output directory for scrubbed slices.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "scrubbed")]
    pub output_dir: PathBuf,

    /// Disable the per-folder progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
