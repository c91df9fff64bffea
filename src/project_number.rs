//! Canonical project-number recovery from share paths.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::taxonomy::{PROJECT_TOKEN_LEN, is_numeric_token};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectNumberError {
    #[error("no 5-digit project number in {}", path.display())]
    NotFound { path: PathBuf },

    #[error("multiple project number candidates in {}: {}", path.display(), candidates.join(", "))]
    Ambiguous {
        path: PathBuf,
        candidates: Vec<String>,
    },
}

/// Recovers the canonical project number from a path.
///
/// A segment qualifies if it is exactly 5 ASCII digits and its last three
/// digits are not all zero; `25000` names a group root, never a project. A
/// sub-project path like `…/27000/27170/27170.001` resolves through its
/// parent segment to `27170` (the `.001` segment is not 5 digits wide).
///
/// Zero qualifying segments is [`ProjectNumberError::NotFound`]; two or more
/// is [`ProjectNumberError::Ambiguous`] with the candidates in path order.
/// The extractor never guesses among candidates.
pub fn extract_project_number(path: &Path) -> Result<String, ProjectNumberError> {
    let mut candidates: Vec<String> = Vec::new();
    for segment in path.iter() {
        let Some(name) = segment.to_str() else {
            continue;
        };
        if is_project_number(name) {
            candidates.push(name.to_string());
        }
    }
    match candidates.len() {
        0 => Err(ProjectNumberError::NotFound {
            path: path.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(ProjectNumberError::Ambiguous {
            path: path.to_path_buf(),
            candidates,
        }),
    }
}

/// Returns true if `name` is a valid project number token.
#[must_use]
pub fn is_project_number(name: &str) -> bool {
    is_numeric_token(name, PROJECT_TOKEN_LEN) && !name.ends_with("000")
}

#[cfg(test)]
#[path = "project_number_tests.rs"]
mod tests;
