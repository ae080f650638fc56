//! Tests for the `info` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::{transcript_fixture, GAPPED_TRANSCRIPT};

fn scriptcut() -> Command {
    Command::cargo_bin("scriptcut").expect("binary built")
}

#[test]
fn info_reports_segments_and_total() {
    let (_dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);

    scriptcut()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items (1 removed), 2 included segments"))
        .stdout(predicate::str::contains("00:00:09.000"));
}

#[test]
fn info_shows_display_mapping_of_second_segment() {
    let (_dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);

    // Second segment: actual 8-12 mapped to display 5-9
    scriptcut()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00:08.000 - 00:00:12.000"))
        .stdout(predicate::str::contains("00:00:05.000 - 00:00:09.000"));
}

#[test]
fn info_ignores_malformed_lines() {
    let (_dir, path) = transcript_fixture(
        "this line is noise\n[00:00:00.000 - 00:00:02.000] kept\nmore noise\n",
    );

    scriptcut()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 items (0 removed), 1 included segments"));
}

#[test]
fn info_with_all_spans_removed() {
    let (_dir, path) = transcript_fixture("[00:00:00.000 - 00:00:05.000] \n");

    scriptcut()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to play"));
}

#[test]
fn info_fails_on_missing_file() {
    scriptcut()
        .arg("info")
        .arg("no-such-transcript.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read transcript"));
}
