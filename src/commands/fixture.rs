use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::archive::DEFAULT_ARCHIVE_DIR;
use crate::cli::{Cli, FixtureArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RcrdScanError, Result};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Old-layout projects: disciplines sit directly under the project.
const OLD_LAYOUT: [(&str, &str); 3] = [("25000", "25633"), ("25000", "25640"), ("27000", "27868")];

/// New-layout projects: disciplines sit under a `<project>.<suffix>` child.
const NEW_LAYOUT: [(&str, &str, &str); 4] = [
    ("27000", "27170", "001"),
    ("27000", "27180", "005"),
    ("24000", "24324", "002"),
    ("24000", "24324", "003"),
];

/// Seed files per archive: subdirectory, file name, age in days. The spread
/// of ages lets different window lengths match different subtrees.
const FILE_SCENARIOS: [(&str, &str, u32); 5] = [
    ("", "readme.txt", 1),
    ("issued", "package_list.txt", 3),
    ("issued/drawings", "sheet_register.txt", 10),
    ("WIP", "notes.txt", 0),
    ("archive", "old_issue_log.txt", 30),
];

#[must_use]
pub fn run_fixture(args: &FixtureArgs, cli: &Cli) -> i32 {
    match run_fixture_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                None,
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Builds a synthetic project tree with files of controlled ages.
///
/// Every office gets the same fixed set of projects in both layout
/// conventions, so scans over the tree have predictable results.
///
/// # Errors
/// Returns an error if `--wipe` targets a directory not named `test_dirs`,
/// or if any directory or file cannot be created.
pub fn run_fixture_impl(args: &FixtureArgs, cli: &Cli) -> Result<i32> {
    // 1. Optionally wipe the previous tree, guarded by directory name
    if args.wipe {
        wipe_fixture_root(&args.root)?;
    }

    // 2. Same tree shape under every office
    let mut archives = 0usize;
    for office in &args.offices {
        let office_dir = args.root.join(office);
        for (group, project) in OLD_LAYOUT {
            let project_dir = office_dir.join(group).join(project);
            for discipline in &args.disciplines {
                let tag = format!("{office}-{group}-{project}-{discipline}");
                seed_archive(&project_dir.join(discipline).join(DEFAULT_ARCHIVE_DIR), &tag)?;
                archives += 1;
            }
        }
        for (group, project, suffix) in NEW_LAYOUT {
            let subproject = format!("{project}.{suffix}");
            let subproject_dir = office_dir.join(group).join(project).join(&subproject);
            for discipline in &args.disciplines {
                let tag = format!("{office}-{group}-{project}-{subproject}-{discipline}");
                seed_archive(
                    &subproject_dir.join(discipline).join(DEFAULT_ARCHIVE_DIR),
                    &tag,
                )?;
                archives += 1;
            }
        }
    }

    if !cli.quiet {
        println!("Fixture tree created under: {}", args.root.display());
        println!(
            "  {} offices, {} archives, {} files per archive",
            args.offices.len(),
            archives,
            FILE_SCENARIOS.len()
        );
    }

    Ok(EXIT_SUCCESS)
}

/// Deletes `root` only when its final component is named `test_dirs`.
/// The guard prevents pointing `--wipe` at a real share by accident.
fn wipe_fixture_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    let guarded = root
        .file_name()
        .is_some_and(|name| name.eq_ignore_ascii_case("test_dirs"));
    if !guarded {
        return Err(RcrdScanError::Config(format!(
            "Refusing to delete non-test path: {}",
            root.display()
        )));
    }
    fs::remove_dir_all(root)?;
    Ok(())
}

fn seed_archive(archive_dir: &Path, tag: &str) -> Result<()> {
    for (subdir, name, age_days) in FILE_SCENARIOS {
        let dir = if subdir.is_empty() {
            archive_dir.to_path_buf()
        } else {
            archive_dir.join(subdir)
        };
        fs::create_dir_all(&dir)?;

        let path = dir.join(name);
        fs::write(&path, tag)?;
        let file = fs::OpenOptions::new().write(true).open(&path)?;
        file.set_modified(SystemTime::now() - DAY * age_days)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
