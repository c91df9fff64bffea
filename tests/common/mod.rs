#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the rcrd-scan binary.
#[macro_export]
macro_rules! rcrd_scan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("rcrd-scan"))
    };
}

/// A scan config covering one office and one discipline, pointed at the
/// fixture's `share` directory by the test itself via `--root`.
pub const BASIC_CONFIG: &str = r#"
version = "1"

[scan]
offices = ["SSC"]
disciplines = ["CVL"]
window_days = 30
"#;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Conventional share root used by the scan tests.
    pub fn share(&self) -> PathBuf {
        self.dir.path().join("share")
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates a basic rcrd-scan config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".rcrd-scan.toml", content);
    }

    /// Creates a file and backdates its modification time by `age_days`.
    pub fn create_aged_file(&self, relative_path: &str, age_days: u64) {
        self.create_file(relative_path, "fixture file");
        let path = self.dir.path().join(relative_path);
        let file = fs::OpenOptions::new()
            .write(true)
            .open(&path)
            .expect("Failed to reopen file");
        let age = DAY * u32::try_from(age_days).expect("age fits in u32");
        file.set_modified(SystemTime::now() - age)
            .expect("Failed to set mtime");
    }

    /// Creates `share/<office>/<group>/<project>/<discipline>/RCRD CPY` and
    /// seeds it with one file of the given age.
    pub fn seed_old_layout(
        &self,
        office: &str,
        group: &str,
        project: &str,
        discipline: &str,
        age_days: u64,
    ) {
        let file = format!("share/{office}/{group}/{project}/{discipline}/RCRD CPY/readme.txt");
        self.create_aged_file(&file, age_days);
    }

    /// Same as `seed_old_layout` but with a `<project>.<suffix>` sub-project
    /// carrying the discipline folders.
    pub fn seed_new_layout(
        &self,
        office: &str,
        group: &str,
        project: &str,
        suffix: &str,
        discipline: &str,
        age_days: u64,
    ) {
        let file = format!(
            "share/{office}/{group}/{project}/{project}.{suffix}/{discipline}/RCRD CPY/readme.txt"
        );
        self.create_aged_file(&file, age_days);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
