//! Integration tests for the `fixture` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn fixture_builds_a_scannable_tree() {
    let fixture = TestFixture::new();
    let root = fixture.path().join("test_dirs");

    rcrd_scan!()
        .arg("fixture")
        .arg("--root")
        .arg(&root)
        .args(["--office", "SSC", "--discipline", "CVL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixture tree created under"));

    assert!(root.join("SSC/25000/25633/CVL/RCRD CPY/readme.txt").exists());
    assert!(
        root.join("SSC/27000/27180/27180.005/CVL/RCRD CPY/issued/package_list.txt")
            .exists()
    );
}

#[test]
fn fixture_then_scan_finds_recent_activity() {
    let fixture = TestFixture::new();
    let root = fixture.path().join("test_dirs");

    rcrd_scan!()
        .arg("fixture")
        .arg("--root")
        .arg(&root)
        .args(["--office", "SSC,GLC", "--discipline", "CVL"])
        .assert()
        .success();

    let assert = rcrd_scan!()
        .arg("scan")
        .arg("--root")
        .arg(&root)
        .args(["--office", "SSC,GLC", "--discipline", "CVL"])
        .args(["--days", "7", "--format", "json", "--no-config"])
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    for office in ["SSC", "GLC"] {
        for project in ["25633", "25640", "27868", "27170", "27180", "24324"] {
            assert!(
                !parsed[office]["CVL"][project].as_array().unwrap().is_empty(),
                "no matches for {office}/{project}"
            );
        }
    }
}

#[test]
fn fixture_wipe_requires_test_dirs_name() {
    let fixture = TestFixture::new();
    let root = fixture.path().join("real_share");
    std::fs::create_dir_all(&root).unwrap();

    rcrd_scan!()
        .arg("fixture")
        .arg("--root")
        .arg(&root)
        .arg("--wipe")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Refusing to delete"));

    assert!(root.exists());
}

#[test]
fn fixture_quiet_suppresses_summary() {
    let fixture = TestFixture::new();
    let root = fixture.path().join("test_dirs");

    rcrd_scan!()
        .arg("fixture")
        .arg("--root")
        .arg(&root)
        .args(["--office", "SSC", "--discipline", "CVL", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
