// Integration tests for the score-gate CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the score-gate binary.
fn score_gate() -> Command {
    Command::cargo_bin("score-gate").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    score_gate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("score-gate"));
}

#[test]
fn cli_help_flag() {
    score_gate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readiness score"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn score_requires_config_and_metrics() {
    score_gate()
        .args(["score", "only-config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_unknown_format() {
    score_gate()
        .args(["score", "a.toml", "b.json", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn verbose_and_quiet_conflict() {
    score_gate()
        .args(["-v", "-q", "validate", "a.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_config_file_exits_with_code_3() {
    score_gate()
        .args(["validate", "/nonexistent/score-function.toml"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: cannot read"));
}
