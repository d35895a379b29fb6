//! Integration tests for the scan command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dirspace(state: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dirspace").unwrap();
    cmd.arg("--state-dir").arg(state.path());
    cmd
}

fn create_target() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("report.txt"), vec![b'x'; 1_000_000]).unwrap();
    fs::write(tmp.path().join("archive.zip"), vec![b'x'; 2_000_000]).unwrap();
    fs::write(tmp.path().join("notes.md"), vec![b'x'; 500]).unwrap();
    tmp
}

#[test]
fn scan_reports_each_entry_and_the_total() {
    let state = TempDir::new().unwrap();
    let target = create_target();

    dirspace(&state)
        .arg("scan")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("report.txt takes up 1000KB"))
        .stdout(predicate::str::contains("archive.zip takes up 2000KB"))
        .stdout(predicate::str::contains("notes.md takes up 0.5KB"))
        .stdout(predicate::str::contains("3.00MB in current folder."));
}

#[test]
fn skipped_names_are_reported_and_excluded_from_the_total() {
    let state = TempDir::new().unwrap();
    let target = create_target();

    dirspace(&state)
        .args(["scan", "--skip", "archive.zip,notes.md"])
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped unwanted file, archive.zip"))
        .stdout(predicate::str::contains("Skipped unwanted file, notes.md"))
        .stdout(predicate::str::contains("1.00MB in current folder."));
}

#[test]
fn totals_only_suppresses_per_entry_lines() {
    let state = TempDir::new().unwrap();
    let target = create_target();

    dirspace(&state)
        .args(["scan", "--totals-only"])
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("takes up").not())
        .stdout(predicate::str::contains("3.00MB in current folder."));
}

#[test]
fn scan_never_deletes_or_records_stats() {
    let state = TempDir::new().unwrap();
    let target = create_target();

    dirspace(&state)
        .arg("scan")
        .arg(target.path())
        .assert()
        .success();

    assert!(target.path().join("report.txt").exists());
    assert!(target.path().join("archive.zip").exists());
    assert!(!state.path().join("stats.json").exists());
    assert!(!state.path().join("deleted_files.log").exists());
}

#[test]
fn scan_of_missing_directory_fails() {
    let state = TempDir::new().unwrap();

    dirspace(&state)
        .args(["scan", "/nonexistent/dir/42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn scan_of_a_plain_file_fails() {
    let state = TempDir::new().unwrap();
    let target = create_target();

    dirspace(&state)
        .arg("scan")
        .arg(target.path().join("notes.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn subdirectories_are_listed_but_not_entered() {
    let state = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    fs::create_dir(target.path().join("nested")).unwrap();
    fs::write(target.path().join("nested/inner.bin"), vec![b'x'; 9000]).unwrap();

    dirspace(&state)
        .arg("scan")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nested takes up"))
        .stdout(predicate::str::contains("inner.bin").not());
}

#[test]
fn empty_directory_totals_zero() {
    let state = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    dirspace(&state)
        .arg("scan")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00MB in current folder."));
}
