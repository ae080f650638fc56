//! Simulated export operations.
//!
//! Neither export does real media processing: the transcript export writes
//! the JSON document, and the video export waits a fixed delay and writes a
//! static placeholder file. A failed video export is caught and logged, the
//! `exporting` flag is reset so the session stays interactive, and nothing
//! is retried.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use crate::editor::EditorSession;
use crate::player::Media;

/// Static placeholder standing in for a rendered MP4 (an `ftyp` box stub).
const PLACEHOLDER_MP4: &[u8] = b"\x00\x00\x00\x18ftypmp42\x00\x00\x00\x00mp42isom";

/// Typed errors for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize transcript: {0}")]
    Serialize(anyhow::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the transcript export document (pretty-printed JSON with
/// `HH:MM:SS.mmm` timecodes) to `path`.
pub fn export_transcript<M: Media>(
    session: &EditorSession<M>,
    path: &Path,
) -> Result<(), ExportError> {
    let json = session
        .transcript()
        .to_export_json()
        .map_err(ExportError::Serialize)?;

    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Simulated video render: fixed delay, then a placeholder MP4 stub.
///
/// Returns whether a file was produced. Re-entry while an export is in
/// flight is refused, and a failure is logged and swallowed after resetting
/// the exporting flag; no error surfaces to the caller.
pub fn export_video<M: Media>(
    session: &mut EditorSession<M>,
    path: &Path,
    delay: Duration,
) -> bool {
    if session.is_exporting() {
        debug!("export already in progress, ignoring request");
        return false;
    }

    session.set_exporting(true);
    let result = render_placeholder(path, delay);
    session.set_exporting(false);

    match result {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, path = %path.display(), "video export failed");
            false
        }
    }
}

fn render_placeholder(path: &Path, delay: Duration) -> std::io::Result<()> {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    fs::write(path, PLACEHOLDER_MP4)
}
