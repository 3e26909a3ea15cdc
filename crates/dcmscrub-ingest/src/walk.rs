//! Recursive traversal of a DICOM folder tree.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{IngestError, Result};

/// File extensions that never hold slice data (case-insensitive).
const EXCLUDED_EXTENSIONS: &[&str] = &["lnk", "xlsx", "csv", "zip", "xml", "ini", "stl"];

/// Exact file names that never hold slice data.
const EXCLUDED_NAMES: &[&str] = &["DIRFILE", "DICOMDIR", "dirty", "_DS_Store"];

/// One directory visited during traversal, with its candidate data files.
///
/// A directory containing only excluded entries still yields a group with
/// an empty candidate list.
#[derive(Debug, Clone)]
pub struct DirectoryGroup {
    /// Path of the visited directory.
    pub path: PathBuf,
    /// Candidate file names within the directory, sorted by name.
    pub candidate_files: Vec<String>,
}

impl DirectoryGroup {
    /// Returns true when the directory held no candidate files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidate_files.is_empty()
    }
}

/// Walks `root` depth-first and returns one group per directory visited.
///
/// The root group comes first, followed by subdirectories in name order.
/// Hidden directories are not descended. Subdirectories that cannot be
/// listed are skipped.
///
/// # Errors
///
/// Returns an error when `root` is not a directory or cannot be listed.
pub fn walk_tree(root: &Path) -> Result<Vec<DirectoryGroup>> {
    if !root.is_dir() {
        return Err(IngestError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut groups = Vec::new();
    let entries = list_entries(root).map_err(|source| IngestError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    })?;
    visit(root, entries, &mut groups);
    Ok(groups)
}

/// Sorted directory and file names of one directory, post filtering.
struct Entries {
    subdirs: Vec<String>,
    candidates: Vec<String>,
}

fn visit(dir: &Path, entries: Entries, groups: &mut Vec<DirectoryGroup>) {
    trace!(path = %dir.display(), candidates = entries.candidates.len(), "visiting directory");
    groups.push(DirectoryGroup {
        path: dir.to_path_buf(),
        candidate_files: entries.candidates,
    });

    for name in entries.subdirs {
        let subdir = dir.join(&name);
        match list_entries(&subdir) {
            Ok(sub_entries) => visit(&subdir, sub_entries, groups),
            Err(error) => {
                debug!(path = %subdir.display(), %error, "skipping unreadable directory");
            }
        }
    }
}

fn list_entries(dir: &Path) -> std::io::Result<Entries> {
    let mut subdirs = Vec::new();
    let mut candidates = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if entry.path().is_dir() {
            subdirs.push(name);
        } else if is_candidate(&name) {
            candidates.push(name);
        }
    }

    subdirs.sort();
    candidates.sort();
    Ok(Entries {
        subdirs,
        candidates,
    })
}

/// Whether a (non-hidden) file name may hold slice data.
fn is_candidate(name: &str) -> bool {
    if EXCLUDED_NAMES.contains(&name) {
        return false;
    }
    let excluded_extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            EXCLUDED_EXTENSIONS
                .iter()
                .any(|excluded| ext.eq_ignore_ascii_case(excluded))
        });
    !excluded_extension
}
