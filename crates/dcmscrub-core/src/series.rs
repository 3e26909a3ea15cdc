//! Series grouping: the scan pass over one directory group.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dicom::core::header::HasLength;
use dicom::dictionary_std::tags;
use dicom::object::{DefaultDicomObject, open_file};
use tracing::debug;

use dcmscrub_ingest::DirectoryGroup;

use crate::error::{Result, ScrubError};

/// Slices of one series discovered within a directory group.
///
/// Keyed by instance number, so the index set and the index-to-path
/// mapping cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct SeriesRecord {
    slices: BTreeMap<i32, PathBuf>,
}

impl SeriesRecord {
    /// Registers a slice file at `index`. A later file at the same index wins.
    pub fn insert(&mut self, index: i32, path: PathBuf) {
        self.slices.insert(index, path);
    }

    /// Number of distinct slice indexes registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Returns true when no slices were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// The inclusive `[min, max]` index range, or `None` when empty.
    #[must_use]
    pub fn slice_range(&self) -> Option<(i32, i32)> {
        let (start, _) = self.slices.first_key_value()?;
        let (end, _) = self.slices.last_key_value()?;
        Some((*start, *end))
    }

    /// Path registered at `index`, if any.
    #[must_use]
    pub fn path_for(&self, index: i32) -> Option<&Path> {
        self.slices.get(&index).map(PathBuf::as_path)
    }
}

/// Series discovered within one directory group, keyed by SeriesInstanceUID.
pub type SeriesMap = BTreeMap<String, SeriesRecord>;

/// Scans every candidate file in the group and groups it by series.
///
/// Files whose `InstanceNumber` is absent or zero carry no usable slice
/// position and are skipped. A file without a `SeriesInstanceUID`, or one
/// that cannot be parsed as DICOM, aborts the scan.
///
/// The returned map is owned by the caller; nothing is shared across
/// directory groups.
pub fn scan_group(group: &DirectoryGroup) -> Result<SeriesMap> {
    let mut series: SeriesMap = BTreeMap::new();

    for name in &group.candidate_files {
        let path = group.path.join(name);
        let object = open_file(&path).map_err(|source| ScrubError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let series_uid = read_series_uid(&object, &path)?;
        let Some(index) = instance_number(&object, &path)? else {
            debug!(path = %path.display(), "skipping file without a usable instance number");
            continue;
        };

        series.entry(series_uid).or_default().insert(index, path);
    }

    Ok(series)
}

fn read_series_uid(object: &DefaultDicomObject, path: &Path) -> Result<String> {
    let element =
        object
            .element(tags::SERIES_INSTANCE_UID)
            .map_err(|_| ScrubError::MissingAttribute {
                keyword: "SeriesInstanceUID",
                path: path.to_path_buf(),
            })?;
    let uid = element.to_str().map_err(|source| ScrubError::ConvertValue {
        keyword: "SeriesInstanceUID",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(uid.trim_end_matches('\0').trim().to_string())
}

/// Reads the instance number, mapping "absent", "empty" and `0` to `None`.
fn instance_number(object: &DefaultDicomObject, path: &Path) -> Result<Option<i32>> {
    let Ok(element) = object.element(tags::INSTANCE_NUMBER) else {
        return Ok(None);
    };
    // A present-but-empty element carries no usable slice position either.
    if element
        .value()
        .primitive()
        .is_some_and(dicom::core::PrimitiveValue::is_empty)
    {
        return Ok(None);
    }
    let index = element
        .to_int::<i32>()
        .map_err(|source| ScrubError::ConvertValue {
            keyword: "InstanceNumber",
            path: path.to_path_buf(),
            source,
        })?;
    Ok((index != 0).then_some(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_range_and_paths() {
        let mut record = SeriesRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.slice_range(), None);

        record.insert(5, PathBuf::from("b"));
        record.insert(1, PathBuf::from("a"));
        assert_eq!(record.len(), 2);
        assert_eq!(record.slice_range(), Some((1, 5)));
        assert_eq!(record.path_for(1), Some(Path::new("a")));
        assert_eq!(record.path_for(3), None);
    }

    #[test]
    fn later_file_at_same_index_wins() {
        let mut record = SeriesRecord::default();
        record.insert(1, PathBuf::from("first"));
        record.insert(1, PathBuf::from("second"));
        assert_eq!(record.len(), 1);
        assert_eq!(record.path_for(1), Some(Path::new("second")));
    }
}
