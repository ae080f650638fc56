//! `scriptcut export` - transcript and (simulated) video exports.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use scriptcut::editor::{export, EditorSession};
use scriptcut::player::ClockMedia;
use scriptcut::transcript::Transcript;
use scriptcut::Config;

pub fn handle_export_transcript(path: &Path, output: Option<&Path>) -> Result<()> {
    let session = load_session(path)?;
    let output = output.unwrap_or_else(|| Path::new("transcript.json"));

    export::export_transcript(&session, output)
        .with_context(|| format!("Failed to export transcript to {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}

pub fn handle_export_video(path: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let mut session = load_session(path)?;
    let output = output.unwrap_or_else(|| Path::new("output.mp4"));
    let delay = Duration::from_millis(config.export.video_delay_ms);

    if !delay.is_zero() {
        println!("Rendering (simulated, {:.1}s)...", delay.as_secs_f64());
    }

    // Failures are logged and swallowed inside; the flag reset keeps the
    // session interactive either way.
    if !export::export_video(&mut session, output, delay) {
        bail!("Video export did not produce a file");
    }

    println!("Wrote {}", output.display());
    Ok(())
}

fn load_session(path: &Path) -> Result<EditorSession<ClockMedia>> {
    let transcript = Transcript::load(path)?;
    let duration = transcript.items().last().map(|i| i.end).unwrap_or(0.0);
    Ok(EditorSession::new(
        ClockMedia::with_duration(duration),
        transcript,
    ))
}
