//! `scriptcut trim` - blank a time range in the transcript.

use std::path::Path;

use anyhow::{anyhow, Result};

use scriptcut::timecode::parse_timecode;
use scriptcut::transcript::Transcript;

/// Blank `[from, to]` in the transcript and write the edited line format to
/// `output`, or stdout when no output path is given.
pub fn handle_trim(path: &Path, from: &str, to: &str, output: Option<&Path>) -> Result<()> {
    let from = parse_timecode(from).ok_or_else(|| invalid_timecode(from))?;
    let to = parse_timecode(to).ok_or_else(|| invalid_timecode(to))?;

    let mut transcript = Transcript::load(path)?;
    transcript.blank_range(from, to);

    match output {
        Some(output) => {
            transcript.save(output)?;
            println!("Wrote {}", output.display());
        }
        None => print!("{}", transcript.to_editable()),
    }

    Ok(())
}

fn invalid_timecode(value: &str) -> anyhow::Error {
    anyhow!("Invalid timecode '{value}' (expected HH:MM:SS.mmm)")
}
