//! Integration tests for the partlookup CLI
//!
//! These tests run the binary against registry, catalog and config files in a
//! temporary directory and check what an operator would see.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod shell_test;

use assert_cmd::cargo;
use predicates::prelude::*;

use common::fixtures::{DataDir, discontinued_registry, three_parts};

/// Helper function to create a partlookup command
fn partlookup() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("partlookup"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Helper to run a command against a data directory's config
fn partlookup_in(data: &DataDir) -> assert_cmd::Command {
    let mut cmd = partlookup();
    cmd.arg("--config").arg(data.config_path()).current_dir(data.path());
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    partlookup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("partlookup"));
}

#[test]
fn test_help() {
    partlookup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exclusion registry"));
}

#[test]
fn test_no_args_shows_info() {
    partlookup().assert().success().stdout(predicate::str::contains("partlookup v"));
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_lookup_padded_input_with_no_parts() {
    let data = DataDir::new();

    partlookup_in(&data)
        .args(["lookup", " 1234-abcd "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No compatible parts found."))
        .stdout(predicate::str::contains("1234-ABCD"));
}

#[test]
fn test_lookup_excluded_part() {
    let data = DataDir::new();
    data.write_registry(&discontinued_registry());
    data.write_catalog("1234-abcd", &three_parts());

    partlookup_in(&data)
        .args(["lookup", "1234-abcd"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Part 1234-ABCD is on the exclusions list"))
        .stdout(predicate::str::contains("Discontinued"))
        .stdout(predicate::str::contains("0000-ALT1").not());
}

#[test]
fn test_lookup_rejects_bad_format() {
    let data = DataDir::new();

    partlookup_in(&data)
        .args(["lookup", "abcd-1234"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid part number format: \"abcd-1234\""));
}

#[test]
fn test_lookup_lists_parts_in_catalog_order() {
    let data = DataDir::new();
    data.write_catalog("0000-ABC123", &three_parts());

    let output = partlookup_in(&data)
        .args(["lookup", "0000-ABC123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Part 0000-ABC123 is valid and compatible parts found:"))
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let oem = stdout.find("0000-OEM").unwrap();
    let alt1 = stdout.find("0000-ALT1").unwrap();
    let alt2 = stdout.find("0000-ALT2").unwrap();
    assert!(oem < alt1 && alt1 < alt2);
}

#[test]
fn test_lookup_registry_failure_shows_generic_message() {
    let data = DataDir::new();
    data.write_registry_raw("this is not json");

    partlookup_in(&data)
        .args(["lookup", "1234-abcd"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Something went wrong. Please try again."))
        .stdout(predicate::str::contains("malformed").not())
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_lookup_catalog_failure_shows_generic_message() {
    let data = DataDir::new();
    data.write_catalog_json("[1, 2, 3]");

    partlookup_in(&data)
        .args(["lookup", "1234-abcd"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Something went wrong. Please try again."));
}

#[test]
fn test_lookup_json_output() {
    let data = DataDir::new();
    data.write_catalog("0000-abc123", &three_parts());

    let assert = partlookup_in(&data).args(["--json", "lookup", "0000-abc123"]).assert().success();
    let json = json_stdout(assert.get_output());

    assert_eq!(json["status"], "resolved");
    assert_eq!(json["identifier"], "0000-ABC123");
    assert_eq!(json["parts"].as_array().unwrap().len(), 3);
    assert_eq!(json["parts"][0]["partNumber"], "0000-OEM");
    assert!(json["checked_at"].is_string());
}

#[test]
fn test_lookup_json_failure_hides_detail() {
    let data = DataDir::new();
    data.remove_registry();

    let assert = partlookup_in(&data).args(["--json", "lookup", "1234-abcd"]).assert().code(1);
    let json = json_stdout(assert.get_output());

    assert_eq!(json["status"], "failed");
    assert_eq!(json["message"], "Something went wrong. Please try again.");
    assert!(!json.to_string().contains("exclusions.json"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let data = DataDir::new();

    partlookup()
        .arg("--config")
        .arg(data.path().join("nope.toml"))
        .args(["lookup", "1234-abcd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_local_config_discovered() {
    let data = DataDir::new();
    data.write_registry(&discontinued_registry());

    partlookup()
        .current_dir(data.path())
        .args(["lookup", "1234-ABCD"])
        .assert()
        .code(3);
}

// =============================================================================
// VALIDATE AND EXCLUSIONS
// =============================================================================

#[test]
fn test_validate_prints_both_forms() {
    partlookup()
        .args(["validate", " 1234-aBcD "])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234-ABCD"))
        .stdout(predicate::str::contains("1234-abcd"));
}

#[test]
fn test_validate_rejects() {
    partlookup()
        .args(["validate", "1234-abc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid part number format: \"1234-abc\""));
}

#[test]
fn test_validate_hyphen_prefixed_input_is_rejected() {
    partlookup().args(["validate", "-1234-abcd"]).assert().code(2);
}

#[test]
fn test_exclusions_listed() {
    let data = DataDir::new();
    data.write_registry(&discontinued_registry());

    partlookup_in(&data)
        .arg("exclusions")
        .assert()
        .success()
        .stdout(predicate::str::contains("1234-ABCD"))
        .stdout(predicate::str::contains("Discontinued"));
}

#[test]
fn test_exclusions_unavailable() {
    let data = DataDir::new();
    data.remove_registry();

    partlookup_in(&data)
        .arg("exclusions")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Something went wrong. Please try again."));
}
