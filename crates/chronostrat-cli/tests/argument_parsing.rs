//! Focused CLI argument parsing and command output tests.
//!
//! Every command here runs fully offline against the built-in sample set or
//! a temporary JSON file, so the whole suite is fast and deterministic.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Version & Help
// ============================================================================

#[test]
fn version_command_succeeds() {
    Command::cargo_bin("chronostrat")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chronostrat"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("chronostrat")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chronostrat"));
}

#[test]
fn help_flag_shows_about_line() {
    // The about line comes from the package description, not the struct doc.
    Command::cargo_bin("chronostrat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan time-sorted buckets"))
        .stdout(predicate::str::contains("enumerate chains"));
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn demo_renders_every_section() {
    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["--no-color", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buckets"))
        .stdout(predicate::str::contains("Successor table"))
        .stdout(predicate::str::contains("Chains"))
        .stdout(predicate::str::contains("(4 chains)"));
}

// ============================================================================
// Run
// ============================================================================

#[test]
fn run_scans_a_nanos_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("buckets.json");
    fs::write(&path, "[[1, 2], [3]]").unwrap();

    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["--no-color", "run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 chains)"));
}

#[test]
fn run_accepts_calendar_strings() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("buckets.json");
    fs::write(
        &path,
        r#"[["2023-01-01"], ["2023-01-02T00:00:00Z"]]"#,
    )
    .unwrap();

    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["--no-color", "run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 chain)"));
}

#[test]
fn run_limit_bounds_rendered_chains() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("buckets.json");
    fs::write(&path, "[[1, 2], [3]]").unwrap();

    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["--no-color", "run", path.to_str().unwrap(), "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(showing 1 of 2 chains)"));
}

#[test]
fn run_json_emits_machine_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("buckets.json");
    fs::write(&path, "[[1, 2], [3]]").unwrap();

    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["run", path.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chain_count\": 2"));
}

#[test]
fn run_rejects_missing_file() {
    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["run", "/nonexistent/buckets.json"])
        .assert()
        .failure();
}

#[test]
fn run_rejects_garbage_timestamps() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("buckets.json");
    fs::write(&path, r#"[["next tuesday"]]"#).unwrap();

    Command::cargo_bin("chronostrat")
        .unwrap()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure();
}
