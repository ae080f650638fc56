//! Media element abstraction.
//!
//! The playback driver talks to a seekable, time-addressable media element
//! through the [`Media`] trait: get/set position, duration once metadata is
//! loaded, play/pause, volume. [`ClockMedia`] is the bundled implementation,
//! a simulated element whose position advances with wall-clock time while
//! playing.

use std::time::Instant;

/// A seekable, time-addressable media element. All positions are seconds.
pub trait Media {
    /// Current playback position.
    fn current_time(&self) -> f64;

    /// Seek to an absolute position.
    fn set_current_time(&mut self, time: f64);

    /// Total duration, or `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;

    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Set the volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f64);
}

/// Simulated media element driven by the wall clock.
///
/// While playing, `current_time` is the position at the last state change
/// plus the elapsed wall time since it; pausing or seeking folds the elapsed
/// time back into the stored position.
#[derive(Debug, Clone)]
pub struct ClockMedia {
    duration: Option<f64>,
    position: f64,
    /// Wall-clock instant playback started or resumed; `None` while paused.
    started: Option<Instant>,
    volume: f64,
}

impl ClockMedia {
    /// A new element with no source loaded yet.
    pub fn new() -> Self {
        Self {
            duration: None,
            position: 0.0,
            started: None,
            volume: 1.0,
        }
    }

    /// A new element whose metadata is already loaded.
    pub fn with_duration(duration: f64) -> Self {
        let mut media = Self::new();
        media.load(duration);
        media
    }

    /// Load (or replace) the source: metadata becomes available and the
    /// position resets to zero.
    pub fn load(&mut self, duration: f64) {
        self.duration = Some(duration.max(0.0));
        self.position = 0.0;
        self.started = None;
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    fn clamp(&self, time: f64) -> f64 {
        match self.duration {
            Some(duration) => time.clamp(0.0, duration),
            None => time.max(0.0),
        }
    }
}

impl Default for ClockMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl Media for ClockMedia {
    fn current_time(&self) -> f64 {
        let elapsed = self
            .started
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        self.clamp(self.position + elapsed)
    }

    fn set_current_time(&mut self, time: f64) {
        self.position = self.clamp(time);
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn play(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        self.position = self.current_time();
        self.started = None;
    }

    fn is_paused(&self) -> bool {
        self.started.is_none()
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}
