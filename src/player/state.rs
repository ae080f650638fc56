//! Playback state shared across player modules.

/// The playback state machine has exactly two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Paused,
    Playing,
}

/// Published playback position in both time bases.
///
/// `actual` addresses the original media timeline, `display` the gap-free
/// virtual timeline. The driver republishes both on every tick and seek.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackPosition {
    /// Position on the original, unedited media timeline (seconds).
    pub actual: f64,
    /// Position on the virtual, gap-free timeline (seconds).
    pub display: f64,
}
