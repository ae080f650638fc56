//! Integration tests driving the compiled `scriptcut` binary.

mod export_test;
mod info_test;
mod play_test;
mod trim_test;

use std::path::PathBuf;

use tempfile::TempDir;

/// A transcript with a removed span between two kept ones (the worked
/// example: 5s + gap + 4s = 9s of display time).
pub const GAPPED_TRANSCRIPT: &str = "\
[00:00:00.000 - 00:00:05.000] first part
[00:00:05.000 - 00:00:08.000]
[00:00:08.000 - 00:00:12.000] second part
";

/// Write a transcript into a fresh temp dir and return (dir, path).
pub fn transcript_fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("transcript.txt");
    std::fs::write(&path, content).expect("write transcript fixture");
    (dir, path)
}
