//! Playback over the edited timeline.
//!
//! The player is organized into submodules:
//! - `media`: the [`Media`] element abstraction and the simulated
//!   [`ClockMedia`] implementation
//! - `state`: the two-state machine ([`PlayerState`]) and published position
//! - `driver`: [`PlaybackDriver`], the gap-skipping state machine
//! - `ticker`: [`FrameTicker`], the per-frame poll cadence
//!
//! # Usage
//!
//! ```
//! use scriptcut::player::{ClockMedia, PlaybackDriver};
//! use scriptcut::timeline::SegmentMap;
//! use scriptcut::transcript::Transcript;
//!
//! let transcript = Transcript::parse_str("[00:00:00.000 - 00:00:05.000] hello");
//! let map = SegmentMap::derive(&transcript);
//! let mut driver = PlaybackDriver::new(ClockMedia::with_duration(5.0), map);
//! driver.play();
//! driver.tick(); // once per frame while playing
//! driver.pause();
//! ```

mod driver;
mod media;
mod state;
mod ticker;

pub use driver::PlaybackDriver;
pub use media::{ClockMedia, Media};
pub use state::{PlaybackPosition, PlayerState};
pub use ticker::FrameTicker;
