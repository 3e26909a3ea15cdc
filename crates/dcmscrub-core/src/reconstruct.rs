//! Slice reconstruction: the per-series pass that rewrites files.

use std::path::{Path, PathBuf};

use dicom::core::{DataElement, PrimitiveValue, VR};
use dicom::dictionary_std::tags;
use dicom::object::open_file;
use dicom::pixeldata::PixelDecoder;
use tracing::{debug, info};

use crate::deident::{strip_identifying_fields, strip_private_tags};
use crate::error::{Result, ScrubError};
use crate::series::SeriesRecord;
use crate::stripe::generate_stripe;

/// Reconstructs every slice of one series into `output_dir`.
///
/// The series' index range must be contiguous: the range is validated
/// before any file is touched, and a gap aborts the run with
/// [`ScrubError::MissingSlice`]. Outputs land in a per-series
/// subdirectory (`<output_dir>/<series_uid>/slice_<index>.dcm`) so that
/// series with overlapping index numbering cannot collide; pre-existing
/// files are overwritten.
///
/// Returns the paths written, in ascending index order.
pub fn reconstruct_series(
    series_uid: &str,
    record: &SeriesRecord,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let Some((start, end)) = record.slice_range() else {
        return Ok(Vec::new());
    };

    // Gaps are fatal; fail before writing anything. No pre-sized
    // allocation here: the span is untrusted input and may not fit.
    let mut slices = Vec::new();
    for index in start..=end {
        match record.path_for(index) {
            Some(path) => slices.push((index, path)),
            None => {
                return Err(ScrubError::MissingSlice {
                    series_uid: series_uid.to_string(),
                    index,
                });
            }
        }
    }

    let series_dir = output_dir.join(series_uid);
    std::fs::create_dir_all(&series_dir).map_err(|source| ScrubError::CreateOutputDir {
        path: series_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(slices.len());
    for (index, path) in slices {
        let output_path = series_dir.join(format!("slice_{index}.dcm"));
        scrub_slice(path, index, &output_path)?;
        written.push(output_path);
    }

    info!(
        series_uid,
        start,
        end,
        files = written.len(),
        "reconstructed series"
    );
    Ok(written)
}

/// Rewrites a single slice: fresh read, strip, replace pixels, write.
fn scrub_slice(path: &Path, index: i32, output_path: &Path) -> Result<()> {
    let mut object = open_file(path).map_err(|source| ScrubError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = object
        .decode_pixel_data()
        .map_err(|source| ScrubError::PixelData {
            path: path.to_path_buf(),
            source,
        })?;
    let stripe = generate_stripe(decoded.rows(), decoded.columns(), index);

    let identifying = strip_identifying_fields(&mut object);
    let private = strip_private_tags(&mut object);
    debug!(
        path = %path.display(),
        index,
        identifying,
        private,
        "stripped attributes"
    );

    object.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::from(stripe.to_bytes()),
    ));

    object
        .write_to_file(output_path)
        .map_err(|source| ScrubError::WriteFile {
            path: output_path.to_path_buf(),
            source,
        })?;
    Ok(())
}
