//! CLI Integration Tests
//!
//! Runs the `estimate` binary with assert_cmd to exercise main.rs code paths.

// Binaries are stubbed during coverage builds
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("test-data");
    path.push(filename);
    path
}

fn estimate() -> Command {
    Command::cargo_bin("estimate").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    estimate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    estimate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("estimate"));
}

#[test]
fn test_export_help_lists_options() {
    estimate()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--flat"))
        .stdout(predicate::str::contains("--config"));
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPORT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_writes_xlsx() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("estimate.xlsx");

    estimate()
        .arg("export")
        .arg(test_data_path("request.json"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Export Complete"))
        .stdout(predicate::str::contains("零元整"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_flat_with_config_verbose() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("flat.xlsx");

    estimate()
        .arg("export")
        .arg(test_data_path("flat.json"))
        .arg(&output)
        .arg("--flat")
        .arg("--config")
        .arg(test_data_path("estimate.yaml"))
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laying out workbook"));

    assert!(output.exists());
}

#[test]
fn test_export_invalid_request_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.xlsx");

    estimate()
        .arg("export")
        .arg(test_data_path("invalid.json"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no line items"));

    assert!(!output.exists());
}

#[test]
fn test_export_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    estimate()
        .arg("export")
        .arg(dir.path().join("missing.json"))
        .arg(dir.path().join("out.xlsx"))
        .assert()
        .failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// VALIDATE AND LAYOUT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_validate_valid_request() {
    estimate()
        .arg("validate")
        .arg(test_data_path("request.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 middle categories, 3 items"));
}

#[test]
fn test_validate_invalid_request() {
    estimate()
        .arg("validate")
        .arg(test_data_path("invalid.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation failed"));
}

#[test]
fn test_layout_prints_rows() {
    estimate()
        .arg("layout")
        .arg(test_data_path("flat.json"))
        .arg("--flat")
        .assert()
        .success()
        .stdout(predicate::str::contains("F44"))
        .stdout(predicate::str::contains("F48"));
}
