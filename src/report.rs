//! Typed scan report and its assembly from discovery output.

use std::path::PathBuf;
use std::time::SystemTime;

use indexmap::IndexMap;
use serde::Serialize;

use crate::archive::locate_archive;
use crate::error::{RcrdScanError, ScanWarning};
use crate::output::ScanProgress;
use crate::project_number::extract_project_number;
use crate::scan::scan_archive;

/// Per-project matched directories within one discipline.
pub type ProjectMatches = IndexMap<String, Vec<PathBuf>>;

/// Per-discipline project results within one office.
pub type DisciplineProjects = IndexMap<String, ProjectMatches>;

/// Header of the trailing path column produced by [`flatten`].
pub const PATH_COLUMN: &str = "path";

/// Nested scan result: office → discipline → project number → matched
/// directory paths. All levels keep insertion order, so serialized output is
/// stable across runs over the same tree.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    by_office: IndexMap<String, DisciplineProjects>,
}

impl ScanReport {
    /// Number of key levels above the path lists.
    pub const DEPTH: usize = 3;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the (office, discipline) slot if absent. Downstream consumers
    /// rely on every configured pair being present, matches or not.
    pub fn ensure_pair(&mut self, office: &str, discipline: &str) {
        self.by_office
            .entry(office.to_string())
            .or_default()
            .entry(discipline.to_string())
            .or_default();
    }

    /// Creates the project slot under (office, discipline) if absent and
    /// appends `paths` to it in iteration order.
    pub fn append<I>(&mut self, office: &str, discipline: &str, project: &str, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.by_office
            .entry(office.to_string())
            .or_default()
            .entry(discipline.to_string())
            .or_default()
            .entry(project.to_string())
            .or_default()
            .extend(paths);
    }

    /// Read view of the office level.
    #[must_use]
    pub const fn offices(&self) -> &IndexMap<String, DisciplineProjects> {
        &self.by_office
    }

    /// Total number of matched directory paths in the tree.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.by_office
            .values()
            .flat_map(IndexMap::values)
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }
}

/// Counters accumulated while assembling, for the summary line.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssembleStats {
    pub projects_visited: usize,
    pub archives_scanned: usize,
    pub matched_directories: usize,
}

/// Outcome of one assembly pass.
#[derive(Debug, Default)]
pub struct Assembly {
    pub report: ScanReport,
    pub stats: AssembleStats,
    pub warnings: Vec<ScanWarning>,
}

/// Builds the nested report for the discovered project directories.
///
/// Every (office, discipline) pair present in the inputs gets a key before
/// anything is scanned, so an office with zero matches still appears in the
/// output. Each project directory resolves its project number once; a
/// directory without a usable number is skipped with a warning. A located
/// archive creates its project key even when the walk finds nothing, while
/// a missing archive contributes nothing at all.
#[must_use]
pub fn assemble(
    disciplines: &[String],
    by_office: &IndexMap<String, Vec<PathBuf>>,
    cutoff: SystemTime,
    archive_dir_name: &str,
    progress: &ScanProgress,
) -> Assembly {
    let mut report = ScanReport::new();
    let mut stats = AssembleStats::default();
    let mut warnings = Vec::new();

    for office in by_office.keys() {
        for discipline in disciplines {
            report.ensure_pair(office, discipline);
        }
    }

    for (office, project_dirs) in by_office {
        for project_dir in project_dirs {
            stats.projects_visited += 1;
            let number = match extract_project_number(project_dir) {
                Ok(number) => number,
                Err(e) => {
                    warnings.push(ScanWarning::ProjectNumber(e));
                    progress.inc_by(disciplines.len() as u64);
                    continue;
                }
            };
            for discipline in disciplines {
                let archive = locate_archive(project_dir, discipline, archive_dir_name);
                progress.inc();
                let Some(archive) = archive else {
                    continue;
                };
                stats.archives_scanned += 1;
                let scan = scan_archive(&archive, cutoff);
                stats.matched_directories += scan.matched.len();
                warnings.extend(scan.warnings);
                report.append(office, discipline, &number, scan.matched);
            }
        }
    }

    Assembly {
        report,
        stats,
        warnings,
    }
}

/// One row per matched path with one column per report level plus the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Flattens the nested report into tabular rows.
///
/// `level_names` labels the office, discipline and project columns, in that
/// order; the path column is appended as [`PATH_COLUMN`]. A level-name count
/// that does not match [`ScanReport::DEPTH`] is a caller bug and fails hard
/// before any output is produced.
///
/// # Errors
///
/// Returns [`RcrdScanError::Config`] on a level-name count mismatch.
pub fn flatten(report: &ScanReport, level_names: &[String]) -> crate::Result<FlatTable> {
    if level_names.len() != ScanReport::DEPTH {
        return Err(RcrdScanError::Config(format!(
            "flatten needs exactly {} level names for office, discipline and project, got {}",
            ScanReport::DEPTH,
            level_names.len()
        )));
    }

    let mut headers = level_names.to_vec();
    headers.push(PATH_COLUMN.to_string());

    let mut rows = Vec::new();
    for (office, disciplines) in report.offices() {
        for (discipline, projects) in disciplines {
            for (project, paths) in projects {
                for path in paths {
                    rows.push(vec![
                        office.clone(),
                        discipline.clone(),
                        project.clone(),
                        path.display().to_string(),
                    ]);
                }
            }
        }
    }

    Ok(FlatTable { headers, rows })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
