//! Tests for the `play` subcommand's non-interactive paths.
//!
//! Interactive playback needs a terminal; only the degenerate cases are
//! exercised here.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::transcript_fixture;

fn scriptcut() -> Command {
    Command::cargo_bin("scriptcut").expect("binary built")
}

#[test]
fn play_with_no_included_segments_exits_cleanly() {
    let (_dir, path) = transcript_fixture("[00:00:00.000 - 00:00:05.000] \n");

    scriptcut()
        .arg("play")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to play"));
}

#[test]
fn play_fails_on_missing_file() {
    scriptcut()
        .arg("play")
        .arg("no-such-transcript.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read transcript"));
}
