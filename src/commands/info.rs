//! `scriptcut info` - inspect the derived timeline.

use std::path::Path;

use anyhow::Result;

use scriptcut::timecode::format_timecode;
use scriptcut::timeline::SegmentMap;
use scriptcut::transcript::Transcript;

/// Print the included segments and their display-timeline positions.
pub fn handle_info(path: &Path) -> Result<()> {
    let transcript = Transcript::load(path)?;
    let map = SegmentMap::derive(&transcript);

    let removed = transcript.items().iter().filter(|i| i.is_removed()).count();
    println!(
        "{} items ({} removed), {} included segments",
        transcript.len(),
        removed,
        map.segments().len()
    );

    if map.is_empty() {
        println!("Nothing to play: every span is removed.");
        return Ok(());
    }

    println!();
    println!("  #  actual                        display                       duration");
    for (index, segment) in map.segments().iter().enumerate() {
        println!(
            "{:>3}  {} - {}  {} - {}  {:>7.3}s",
            index,
            format_timecode(segment.start),
            format_timecode(segment.end),
            format_timecode(segment.display_start),
            format_timecode(segment.display_end),
            segment.duration,
        );
    }

    println!();
    println!(
        "Total display duration: {} ({:.3}s)",
        format_timecode(map.total_display_duration()),
        map.total_display_duration()
    );

    Ok(())
}
