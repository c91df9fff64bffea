use std::path::Path;
use std::time::{Duration, SystemTime};

use super::*;
use tempfile::TempDir;

const DAY: Duration = Duration::from_secs(86_400);

fn hidden_progress() -> ScanProgress {
    ScanProgress::new(0, true)
}

fn write_aged(path: &Path, days_ago: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "x").unwrap();
    let file = std::fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - days_ago * DAY).unwrap();
}

fn disciplines(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn one_office(office: &str, dirs: Vec<std::path::PathBuf>) -> IndexMap<String, Vec<std::path::PathBuf>> {
    let mut by_office = IndexMap::new();
    by_office.insert(office.to_string(), dirs);
    by_office
}

#[test]
fn fresh_archive_reports_under_project_number() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("SSC/25000/25633");
    let archive = project.join("CVL/RCRD CPY");
    write_aged(&archive.join("readme.txt"), 1);

    let assembly = assemble(
        &disciplines(&["CVL"]),
        &one_office("SSC", vec![project]),
        SystemTime::now() - 7 * DAY,
        "RCRD CPY",
        &hidden_progress(),
    );

    let paths = &assembly.report.offices()["SSC"]["CVL"]["25633"];
    assert_eq!(paths, &vec![archive]);
    assert!(assembly.warnings.is_empty());
}

#[test]
fn stale_archive_keeps_project_key_with_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("SSC/25000/25633");
    write_aged(&project.join("CVL/RCRD CPY/readme.txt"), 30);

    let assembly = assemble(
        &disciplines(&["CVL"]),
        &one_office("SSC", vec![project]),
        SystemTime::now() - 7 * DAY,
        "RCRD CPY",
        &hidden_progress(),
    );

    let projects = &assembly.report.offices()["SSC"]["CVL"];
    assert!(projects.contains_key("25633"));
    assert!(projects["25633"].is_empty());
}

#[test]
fn missing_archive_adds_no_project_key() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("SSC/25000/25633");
    std::fs::create_dir_all(&project).unwrap();

    let assembly = assemble(
        &disciplines(&["CVL"]),
        &one_office("SSC", vec![project]),
        SystemTime::now() - 7 * DAY,
        "RCRD CPY",
        &hidden_progress(),
    );

    let projects = &assembly.report.offices()["SSC"]["CVL"];
    assert!(projects.is_empty());
    assert_eq!(assembly.stats.archives_scanned, 0);
}

#[test]
fn every_office_discipline_pair_gets_a_key() {
    let mut by_office = IndexMap::new();
    by_office.insert("SSC".to_string(), Vec::new());
    by_office.insert("GLC".to_string(), Vec::new());

    let assembly = assemble(
        &disciplines(&["CVL", "STR"]),
        &by_office,
        SystemTime::now(),
        "RCRD CPY",
        &hidden_progress(),
    );

    for office in ["SSC", "GLC"] {
        for discipline in ["CVL", "STR"] {
            assert!(
                assembly.report.offices()[office].contains_key(discipline),
                "missing pair {office}/{discipline}"
            );
        }
    }
}

#[test]
fn project_without_number_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let stray = temp_dir.path().join("SSC/25000/transfers");
    write_aged(&stray.join("CVL/RCRD CPY/readme.txt"), 1);

    let assembly = assemble(
        &disciplines(&["CVL"]),
        &one_office("SSC", vec![stray]),
        SystemTime::now() - 7 * DAY,
        "RCRD CPY",
        &hidden_progress(),
    );

    assert!(assembly.report.offices()["SSC"]["CVL"].is_empty());
    assert_eq!(assembly.warnings.len(), 1);
    assert!(matches!(
        assembly.warnings[0],
        ScanWarning::ProjectNumber(_)
    ));
}

#[test]
fn parent_and_subproject_accumulate_under_one_number() {
    let temp_dir = TempDir::new().unwrap();
    let parent = temp_dir.path().join("SSC/27000/27170");
    let sub = parent.join("27170.001");
    write_aged(&parent.join("CVL/RCRD CPY/readme.txt"), 1);
    write_aged(&sub.join("CVL/RCRD CPY/readme.txt"), 1);

    let assembly = assemble(
        &disciplines(&["CVL"]),
        &one_office("SSC", vec![parent.clone(), sub.clone()]),
        SystemTime::now() - 7 * DAY,
        "RCRD CPY",
        &hidden_progress(),
    );

    let paths = &assembly.report.offices()["SSC"]["CVL"]["27170"];
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], parent.join("CVL/RCRD CPY"));
    assert_eq!(paths[1], sub.join("CVL/RCRD CPY"));
}

#[test]
fn stats_count_projects_archives_and_matches() {
    let temp_dir = TempDir::new().unwrap();
    let with_archive = temp_dir.path().join("SSC/25000/25633");
    let without_archive = temp_dir.path().join("SSC/25000/25640");
    write_aged(&with_archive.join("CVL/RCRD CPY/readme.txt"), 1);
    std::fs::create_dir_all(&without_archive).unwrap();

    let assembly = assemble(
        &disciplines(&["CVL"]),
        &one_office("SSC", vec![with_archive, without_archive]),
        SystemTime::now() - 7 * DAY,
        "RCRD CPY",
        &hidden_progress(),
    );

    assert_eq!(assembly.stats.projects_visited, 2);
    assert_eq!(assembly.stats.archives_scanned, 1);
    assert_eq!(assembly.stats.matched_directories, 1);
    assert_eq!(assembly.report.match_count(), 1);
}

#[test]
fn flatten_emits_one_row_per_path() {
    let mut report = ScanReport::new();
    report.append(
        "SSC",
        "CVL",
        "25633",
        vec![
            Path::new("/a/RCRD CPY").to_path_buf(),
            Path::new("/a/RCRD CPY/issued").to_path_buf(),
        ],
    );
    report.append("SSC", "STR", "25640", vec![Path::new("/b").to_path_buf()]);

    let level_names = disciplines(&["office", "discipline", "project"]);
    let table = flatten(&report, &level_names).unwrap();

    assert_eq!(
        table.headers,
        vec!["office", "discipline", "project", "path"]
    );
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], vec!["SSC", "CVL", "25633", "/a/RCRD CPY"]);
    assert_eq!(table.rows[2], vec!["SSC", "STR", "25640", "/b"]);
    for row in &table.rows {
        assert_eq!(row.len(), level_names.len() + 1);
    }
}

#[test]
fn flatten_skips_empty_branches() {
    let mut report = ScanReport::new();
    report.ensure_pair("SSC", "CVL");

    let table = flatten(&report, &disciplines(&["office", "discipline", "project"])).unwrap();
    assert!(table.rows.is_empty());
    assert_eq!(table.headers.len(), 4);
}

#[test]
fn flatten_rejects_wrong_level_name_count() {
    let report = ScanReport::new();

    let err = flatten(&report, &disciplines(&["office", "discipline"])).unwrap_err();
    assert!(matches!(err, RcrdScanError::Config(_)));
    assert!(err.message().contains("got 2"));
}
