//! Project-directory discovery across office subtrees.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::error::ScanWarning;
use crate::taxonomy::{self, PROJECT_TOKEN_LEN};

/// Outcome of project discovery: per-office project directories plus any
/// non-fatal conditions met while enumerating.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Project directories per office, de-duplicated, in discovery order.
    /// Every configured office and every resolved override office has a
    /// key, even when nothing was found for it.
    pub by_office: IndexMap<String, Vec<PathBuf>>,
    pub warnings: Vec<ScanWarning>,
}

/// Enumerates every project directory under `root`, office by office.
///
/// Two naming conventions coexist on the share. Under the old layout a
/// project sits directly inside a 5-digit group folder; under the new layout
/// the project folder additionally holds sub-project children named
/// `<project>.<suffix>`. Both the project and each of its sub-projects are
/// returned as independent scan units.
///
/// `overrides` names projects reachable outside the plain enumeration, per
/// office. An override for an office already in `offices` is suppressed
/// before resolution since the enumeration covers it. For the rest, the
/// group folder is derived from the first two digits of the project token
/// plus `000`; a derived path that is not a directory drops the entry with
/// a warning.
#[must_use]
pub fn discover(
    root: &Path,
    offices: &[String],
    overrides: &IndexMap<String, Vec<String>>,
) -> Discovery {
    let mut warnings = Vec::new();
    let mut by_office: IndexMap<String, IndexSet<PathBuf>> = IndexMap::new();

    for office in offices {
        let found = by_office.entry(office.clone()).or_default();
        let office_dir = root.join(office);
        for group_dir in
            taxonomy::list_subdirectories(&office_dir, Some(PROJECT_TOKEN_LEN), &mut warnings)
        {
            for project_dir in taxonomy::list_subdirectories(&group_dir, None, &mut warnings) {
                found.insert(project_dir.clone());
                for sub_dir in subproject_dirs(&project_dir, &mut warnings) {
                    found.insert(sub_dir);
                }
            }
        }
    }

    for (office, projects) in overrides {
        if offices.contains(office) {
            continue;
        }
        let found = by_office.entry(office.clone()).or_default();
        for project in projects {
            let candidate = derive_override_path(root, office, project);
            if candidate.is_dir() {
                found.insert(candidate);
            } else {
                warnings.push(ScanWarning::OverrideMissing {
                    office: office.clone(),
                    project: project.clone(),
                    derived: candidate,
                });
            }
        }
    }

    Discovery {
        by_office: by_office
            .into_iter()
            .map(|(office, found)| (office, found.into_iter().collect()))
            .collect(),
        warnings,
    }
}

/// Children of a project directory that follow the sub-project convention.
fn subproject_dirs(project_dir: &Path, warnings: &mut Vec<ScanWarning>) -> Vec<PathBuf> {
    let Some(project_name) = project_dir.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    taxonomy::list_subdirectories(project_dir, None, warnings)
        .into_iter()
        .filter(|child| {
            child
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| taxonomy::is_subproject_name(name, project_name))
        })
        .collect()
}

/// Path an override project is expected at: the group folder is the first
/// two digits of the token followed by `000`.
fn derive_override_path(root: &Path, office: &str, project: &str) -> PathBuf {
    match project.get(..2) {
        Some(prefix) => root.join(office).join(format!("{prefix}000")).join(project),
        None => root.join(office).join(project),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
