//! Archive-folder location inside a project directory.

use std::path::{Path, PathBuf};

/// Default name of the record-copy folder inside a discipline directory.
pub const DEFAULT_ARCHIVE_DIR: &str = "RCRD CPY";

/// Resolves `<project>/<discipline>/<archive_dir_name>` if it exists and is
/// a directory. A plain file with the archive name counts as absent.
#[must_use]
pub fn locate_archive(
    project_dir: &Path,
    discipline: &str,
    archive_dir_name: &str,
) -> Option<PathBuf> {
    let candidate = project_dir.join(discipline).join(archive_dir_name);
    candidate.is_dir().then_some(candidate)
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
