//! Recency walk over an archive subtree.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ScanWarning;

/// Outcome of one archive walk: the matched directories plus any non-fatal
/// conditions met along the way.
#[derive(Debug, Default)]
pub struct ArchiveScan {
    /// Directories directly containing at least one qualifying file, unique
    /// by path.
    pub matched: BTreeSet<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

/// Collects every directory under `archive_root` (the root included) that
/// directly contains a file modified at or after `cutoff`.
///
/// The walk is an explicit depth-first work list. Reading a directory stops
/// at its first qualifying file: the directory is recorded and its remaining
/// entries, including subdirectories not yet enumerated, are never visited.
/// This early exit is kept for parity with earlier report runs; walking
/// exhaustively would change which directories come out as matching, so it
/// stays until the report owners sign off on a change. Enumeration and
/// metadata failures become warnings and leave the affected directory with
/// no qualifying file; they never abort the walk.
#[must_use]
pub fn scan_archive(archive_root: &Path, cutoff: SystemTime) -> ArchiveScan {
    let mut scan = ArchiveScan::default();
    let mut work_list = vec![archive_root.to_path_buf()];

    while let Some(dir) = work_list.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(source) => {
                scan.warnings.push(ScanWarning::ReadDir { path: dir, source });
                continue;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    scan.warnings.push(ScanWarning::Metadata {
                        path: dir.clone(),
                        source,
                    });
                    break;
                }
            };
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    scan.warnings.push(ScanWarning::Metadata {
                        path: entry.path(),
                        source,
                    });
                    break;
                }
            };
            if file_type.is_file() {
                let modified = match entry.metadata().and_then(|m| m.modified()) {
                    Ok(modified) => modified,
                    Err(source) => {
                        scan.warnings.push(ScanWarning::Metadata {
                            path: entry.path(),
                            source,
                        });
                        break;
                    }
                };
                if modified >= cutoff {
                    scan.matched.insert(dir.clone());
                    break;
                }
            } else if file_type.is_dir() {
                work_list.push(entry.path());
            }
        }
    }
    scan
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
