use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use dcmscrub_core::{reconstruct_series, scan_group};
use dcmscrub_ingest::walk_tree;

use crate::cli::Cli;
use crate::types::{ScrubResult, SeriesSummary};

pub fn run_scrub(args: &Cli) -> Result<ScrubResult> {
    let root = &args.dicom_folder;
    let started = Instant::now();

    let groups = walk_tree(root).context("discover series folders")?;
    info!(
        directories = groups.len(),
        root = %root.display(),
        "discovered directory groups"
    );

    let progress = progress_bar(groups.len() as u64, !args.no_progress);
    let mut series_summaries = Vec::new();
    let mut files_written = 0usize;

    for group in &groups {
        let group_span = info_span!("group", path = %group.path.display());
        let _group_guard = group_span.enter();
        progress.set_message(group.path.display().to_string());

        let series_map = scan_group(group)?;
        for (series_uid, record) in &series_map {
            let written = reconstruct_series(series_uid, record, &args.output_dir)?;
            files_written += written.len();
            series_summaries.push(SeriesSummary {
                series_uid: series_uid.clone(),
                directory: group.path.clone(),
                slices: record.len(),
                range: record.slice_range(),
                written: written.len(),
            });
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(ScrubResult {
        root: root.clone(),
        output_dir: args.output_dir.clone(),
        directories: groups.len(),
        series: series_summaries,
        files_written,
        elapsed: started.elapsed(),
    })
}

fn progress_bar(len: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    let style = ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} folders {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    bar.set_style(style);
    bar
}
