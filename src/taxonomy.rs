//! Directory-name classification for the project share hierarchy.
//!
//! The share is laid out office → project group → project → discipline, with
//! group and project folders named by fixed-width numeric tokens. These rules
//! are pure name checks; only [`list_subdirectories`] touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanWarning;

/// Width of the numeric suffix in sub-project names like `27170.001`.
pub const SUBPROJECT_SUFFIX_LEN: usize = 3;

/// Width of group and project number tokens.
pub const PROJECT_TOKEN_LEN: usize = 5;

/// Returns true if `name` consists of exactly `len` ASCII decimal digits.
#[must_use]
pub fn is_numeric_token(name: &str, len: usize) -> bool {
    name.len() == len && name.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `name` follows the sub-project convention for a project
/// directory named `parent_name`.
///
/// The rule is positional, matching the historical tool: the name is exactly
/// one separator plus a fixed-width suffix longer than the parent name, and
/// the byte at the separator position is `.`. The suffix itself is not
/// digit-checked.
#[must_use]
pub fn is_subproject_name(name: &str, parent_name: &str) -> bool {
    name.len() == parent_name.len() + 1 + SUBPROJECT_SUFFIX_LEN
        && name.as_bytes().get(parent_name.len()) == Some(&b'.')
}

/// Lists the immediate subdirectories of `dir`.
///
/// With `digit_len = Some(n)` only children whose name is exactly `n` ASCII
/// digits are kept; with `None` every child directory qualifies. Enumeration
/// failure is not fatal: it pushes a [`ScanWarning::ReadDir`] and yields an
/// empty list so the caller continues with sibling branches. An entry whose
/// file type cannot be read pushes a [`ScanWarning::Metadata`] and ends the
/// listing of this directory early.
pub fn list_subdirectories(
    dir: &Path,
    digit_len: Option<usize>,
    warnings: &mut Vec<ScanWarning>,
) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            warnings.push(ScanWarning::ReadDir {
                path: dir.to_path_buf(),
                source,
            });
            return Vec::new();
        }
    };

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                warnings.push(ScanWarning::Metadata {
                    path: dir.to_path_buf(),
                    source,
                });
                break;
            }
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(source) => {
                warnings.push(ScanWarning::Metadata {
                    path: entry.path(),
                    source,
                });
                break;
            }
        };
        if !file_type.is_dir() {
            continue;
        }
        let keep = match digit_len {
            Some(len) => {
                let name = entry.file_name();
                name.to_str().is_some_and(|name| is_numeric_token(name, len))
            }
            None => true,
        };
        if keep {
            subdirs.push(entry.path());
        }
    }
    subdirs
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
