//! CLI smoke tests for shark.
//!
//! These tests verify the report runs without panicking, exits 0, and
//! writes the expected fields to stdout.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Get a Command for the shark binary.
fn shark_cmd() -> Command {
  cargo_bin_cmd!("shark")
}

#[test]
fn help_flag_works() {
  shark_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  shark_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("shark"));
}

#[test]
fn report_exits_zero_and_prints_identity() {
  shark_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("System:"))
    .stdout(predicate::str::contains("Machine:"))
    .stdout(predicate::str::contains("Rust:"));
}

#[test]
fn report_prints_path_section() {
  shark_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Temp:"));
}

#[test]
#[cfg(not(windows))]
fn report_omits_windows_section_off_windows() {
  shark_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Long paths:").not());
}

#[test]
#[cfg(windows)]
fn report_includes_windows_section() {
  shark_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Long paths:"))
    .stdout(predicate::str::contains("Admin:"));
}
