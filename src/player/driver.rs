//! Gap-skipping playback driver.
//!
//! [`PlaybackDriver`] sits between a [`Media`] element and a [`SegmentMap`]
//! and keeps real-time playback consistent with the edited timeline: spans
//! with no covering included segment are skipped transparently, seeks are
//! addressed in display time, and reaching the end of the last segment stops
//! playback.
//!
//! The driver is cooperative: nothing happens between calls to [`tick`],
//! which the owner is expected to invoke once per frame while playing.
//!
//! [`tick`]: PlaybackDriver::tick

use tracing::debug;

use crate::player::media::Media;
use crate::player::state::{PlaybackPosition, PlayerState};
use crate::timeline::SegmentMap;

/// Drives a media element so excluded spans are skipped during playback.
#[derive(Debug)]
pub struct PlaybackDriver<M: Media> {
    media: M,
    map: SegmentMap,
    state: PlayerState,
    position: PlaybackPosition,
}

impl<M: Media> PlaybackDriver<M> {
    pub fn new(media: M, map: SegmentMap) -> Self {
        let mut driver = Self {
            media,
            map,
            state: PlayerState::Paused,
            position: PlaybackPosition::default(),
        };
        driver.publish(driver.media.current_time());
        driver
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    /// Last published actual-time position.
    pub fn current_time(&self) -> f64 {
        self.position.actual
    }

    /// Last published display-time position.
    pub fn display_time(&self) -> f64 {
        self.position.display
    }

    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    pub fn map(&self) -> &SegmentMap {
        &self.map
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Swap in a freshly derived map after a transcript mutation.
    ///
    /// Playback state is preserved; the display position is republished
    /// against the new map.
    pub fn set_map(&mut self, map: SegmentMap) {
        self.map = map;
        self.publish(self.media.current_time());
    }

    /// Replace the media element, resetting playback to a paused state at
    /// the start. The segment map is untouched.
    pub fn replace_media(&mut self, media: M) {
        self.media = media;
        self.state = PlayerState::Paused;
        self.publish(self.media.current_time());
    }

    /// Request playback.
    ///
    /// If the current actual time falls strictly inside a gap, playback is
    /// relocated to the start of the next included segment first. With no
    /// segment to land on (or an empty map) the request is silently
    /// rejected and the state stays `Paused`.
    pub fn play(&mut self) {
        if self.map.is_empty() {
            return;
        }

        let current = self.media.current_time();
        if self.map.segment_index_at(current).is_none() {
            match self.map.next_segment_after(current) {
                Some(next) => {
                    let start = next.start;
                    debug!(from = current, to = start, "relocating out of gap");
                    self.media.set_current_time(start);
                }
                None => {
                    debug!(at = current, "play rejected: no segment to land on");
                    return;
                }
            }
        }

        self.media.play();
        self.state = PlayerState::Playing;
        self.publish(self.media.current_time());
    }

    pub fn pause(&mut self) {
        self.media.pause();
        self.state = PlayerState::Paused;
        self.publish(self.media.current_time());
    }

    pub fn toggle(&mut self) {
        match self.state {
            PlayerState::Playing => self.pause(),
            PlayerState::Paused => self.play(),
        }
    }

    /// Per-frame poll while playing; a no-op while paused.
    ///
    /// Reads the media's actual position and either jumps past an exhausted
    /// or excluded span, stops at end-of-content, or republishes the
    /// display time.
    pub fn tick(&mut self) {
        if self.state != PlayerState::Playing {
            return;
        }

        let current = self.media.current_time();
        match self.map.segment_index_at(current) {
            Some(index) => {
                let segment = self.map.segments()[index];
                if current >= segment.end {
                    // Reached the end of this segment: continue with the
                    // next one or stop.
                    match self.map.segments().get(index + 1).copied() {
                        Some(next) => self.jump_to(next.start),
                        None => self.stop(),
                    }
                } else {
                    self.publish(current);
                }
            }
            // Drifted into a gap (native playback does not respect the
            // skip exactly): jump forward or stop.
            None => match self.map.next_segment_after(current) {
                Some(next) => {
                    let start = next.start;
                    self.jump_to(start);
                }
                None => self.stop(),
            },
        }
    }

    /// Seek to a display-time target.
    ///
    /// The target is converted through the map (clamping past-the-end
    /// targets to the final segment's actual end), assigned to the media
    /// element, and both positions are republished. A no-op with zero
    /// segments.
    pub fn seek(&mut self, display_target: f64) {
        if self.map.is_empty() {
            return;
        }
        let actual = self.map.to_actual(display_target.max(0.0));
        self.media.set_current_time(actual);
        self.publish(self.media.current_time());
    }

    fn jump_to(&mut self, actual: f64) {
        self.media.set_current_time(actual);
        self.publish(actual);
    }

    fn stop(&mut self) {
        debug!("end of content");
        self.media.pause();
        self.state = PlayerState::Paused;
        self.publish(self.media.current_time());
    }

    fn publish(&mut self, actual: f64) {
        self.position = PlaybackPosition {
            actual,
            display: self.map.to_display(actual),
        };
    }
}
