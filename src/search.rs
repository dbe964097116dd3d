//! File search across an ordered directory list.
//!
//! Candidates are formed by appending the relative path to each directory
//! verbatim, so callers pass relatives starting with `/` (e.g. `/app/conf`).
//! A candidate that cannot be opened is treated as absent, whatever the
//! reason; the search never distinguishes a missing file from an unreadable
//! one.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Collect every directory under which `relative` exists, in list order.
///
/// Each candidate is probed by opening it for read. The scan never stops at
/// a hit, so layered fragments can be aggregated across all of them, highest
/// precedence first. An empty result means nothing was found; it is not an
/// error.
pub fn find_all_existing(relative: &str, directories: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for directory in directories {
        let candidate = candidate_path(directory, relative);
        if File::open(&candidate).is_ok() {
            found.push(candidate);
        }
    }
    found
}

/// Open the first candidate that accepts the requested open options.
///
/// Failed opens are skipped silently and the scan moves on, so an unreadable
/// early candidate does not shadow a later one. `None` means no candidate
/// opened.
pub fn find_first_existing(
    relative: &str,
    directories: &[PathBuf],
    options: &OpenOptions,
) -> Option<File> {
    directories
        .iter()
        .find_map(|directory| options.open(candidate_path(directory, relative)).ok())
}

fn candidate_path(directory: &Path, relative: &str) -> PathBuf {
    let mut full = directory.as_os_str().to_os_string();
    full.push(relative);
    PathBuf::from(full)
}
