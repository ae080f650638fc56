//! Tests for the `export` subcommands.
//!
//! The video export delay comes from config; these tests run in a sandboxed
//! HOME so the simulated render is instant and no user config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::{transcript_fixture, GAPPED_TRANSCRIPT};

fn scriptcut() -> Command {
    Command::cargo_bin("scriptcut").expect("binary built")
}

#[test]
fn export_transcript_writes_json() {
    let (dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);
    let out = dir.path().join("export.json");

    scriptcut()
        .arg("export")
        .arg("transcript")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["start"], "00:00:00.000");
    assert_eq!(items[0]["text"], "first part");
    // The removed span is exported too, with empty text
    assert_eq!(items[1]["text"], "");
}

#[test]
fn export_video_writes_placeholder_file() {
    let (dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("scriptcut");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[export]\nvideo_delay_ms = 0\n",
    )
    .unwrap();
    let out = dir.path().join("cut.mp4");

    scriptcut()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .arg("export")
        .arg("video")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bytes = std::fs::read(&out).unwrap();
    assert!(!bytes.is_empty());
    // MP4 ftyp stub
    assert_eq!(&bytes[4..8], b"ftyp");
}

#[test]
fn export_transcript_fails_on_unwritable_output() {
    let (dir, path) = transcript_fixture(GAPPED_TRANSCRIPT);
    let out = dir.path().join("no-such-dir").join("export.json");

    scriptcut()
        .arg("export")
        .arg("transcript")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export transcript"));
}
