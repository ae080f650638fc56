//! Tests for the `trim` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::{transcript_fixture, GAPPED_TRANSCRIPT};

fn scriptcut() -> Command {
    Command::cargo_bin("scriptcut").expect("binary built")
}

#[test]
fn trim_blanks_range_to_stdout() {
    let (_dir, path) = transcript_fixture("[00:00:00.000 - 00:00:10.000] speech\n");

    scriptcut()
        .arg("trim")
        .arg(&path)
        .args(["00:00:03.000", "00:00:07.000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:00:00.000 - 00:00:03.000] speech"))
        .stdout(predicate::str::contains("[00:00:03.000 - 00:00:07.000] "))
        .stdout(predicate::str::contains("[00:00:07.000 - 00:00:10.000] speech"));
}

#[test]
fn trim_writes_output_file() {
    let (dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);
    let out = dir.path().join("trimmed.txt");

    scriptcut()
        .arg("trim")
        .arg(&path)
        .args(["00:00:08.000", "00:00:12.000"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = std::fs::read_to_string(&out).unwrap();
    // The second kept span is now blanked
    assert!(written.contains("[00:00:08.000 - 00:00:12.000] \n"));
    assert!(written.contains("first part"));
    assert!(!written.contains("second part"));
}

#[test]
fn trim_rejects_bad_timecode() {
    let (_dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);

    scriptcut()
        .arg("trim")
        .arg(&path)
        .args(["bogus", "00:00:02.000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timecode 'bogus'"));
}
