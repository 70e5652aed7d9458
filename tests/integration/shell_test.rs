//! Tests for the interactive `shell` command

use predicates::prelude::*;

use super::partlookup_in;
use crate::common::fixtures::{DataDir, discontinued_registry, three_parts};

#[test]
fn test_shell_single_lookup() {
    let data = DataDir::new();
    data.write_registry(&discontinued_registry());

    partlookup_in(&data)
        .arg("shell")
        .write_stdin("1234-abcd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is on the exclusions list"));
}

#[test]
fn test_shell_last_request_always_shown() {
    let data = DataDir::new();
    data.write_catalog("0000-abc123", &three_parts());

    partlookup_in(&data)
        .arg("shell")
        .write_stdin("abcd-1234\n\n0000-ABC123\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Part 0000-ABC123 is valid and compatible parts found:"));
}

#[test]
fn test_shell_clear() {
    let data = DataDir::new();

    partlookup_in(&data)
        .arg("shell")
        .write_stdin(":clear\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared."));
}

#[test]
fn test_shell_quit_stops_reading() {
    let data = DataDir::new();

    partlookup_in(&data)
        .arg("shell")
        .write_stdin(":quit\nabcd-1234\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid part number format").not());
}
