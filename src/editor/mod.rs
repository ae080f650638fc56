//! Editor session: the single owner of transcript, timeline, and playback.
//!
//! All mutable state lives in [`EditorSession`] and is mutated only through
//! its methods, each corresponding to a discrete user event (edit-save,
//! trim, seek, play/pause, source replacement). Every transcript mutation
//! recomputes the segment map as a pure derivation step and hands it to the
//! playback driver; there is no ambient shared state.

pub mod export;

use tracing::debug;

use crate::player::{Media, PlaybackDriver};
use crate::timeline::SegmentMap;
use crate::transcript::Transcript;

/// Owned editor state wiring a transcript to a playback driver.
#[derive(Debug)]
pub struct EditorSession<M: Media> {
    transcript: Transcript,
    driver: PlaybackDriver<M>,
    exporting: bool,
}

impl<M: Media> EditorSession<M> {
    pub fn new(media: M, transcript: Transcript) -> Self {
        let map = SegmentMap::derive(&transcript);
        Self {
            transcript,
            driver: PlaybackDriver::new(media, map),
            exporting: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn map(&self) -> &SegmentMap {
        self.driver.map()
    }

    pub fn driver(&self) -> &PlaybackDriver<M> {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut PlaybackDriver<M> {
        &mut self.driver
    }

    /// Replace the transcript from edited text (the save action).
    ///
    /// The text is reparsed with the usual drop-malformed-lines policy and
    /// the segment map is recomputed.
    pub fn save_edit(&mut self, text: &str) {
        self.transcript = Transcript::parse_str(text);
        self.recompute();
    }

    /// Exclude an actual-time range from playback.
    pub fn trim(&mut self, from: f64, to: f64) {
        self.transcript.blank_range(from, to);
        self.recompute();
    }

    /// Replace the media source. Resets playback bookkeeping; the transcript
    /// and derived map are untouched.
    pub fn replace_source(&mut self, media: M) {
        self.driver.replace_media(media);
    }

    /// Forwarded to the media element; orthogonal to the mapping.
    pub fn set_volume(&mut self, volume: f64) {
        self.driver.media_mut().set_volume(volume);
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    fn set_exporting(&mut self, exporting: bool) {
        self.exporting = exporting;
    }

    fn recompute(&mut self) {
        let map = SegmentMap::derive(&self.transcript);
        debug!(
            segments = map.segments().len(),
            total_display = map.total_display_duration(),
            "recomputed segment map"
        );
        self.driver.set_map(map);
    }
}
