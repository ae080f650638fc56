//! Transcript-driven video cut editor core.
//!
//! Edit a video by editing its transcript: spans whose text is blanked are
//! excluded from playback, and the remaining spans are presented on a
//! gap-free "display" timeline. This crate owns the time-domain mapping
//! between the two timelines and the playback machinery that honors it;
//! rendering, upload, and real media processing live elsewhere.
//!
//! # Modules
//!
//! - [`transcript`]: the editable line format and its normalization
//! - [`timeline`]: included-segment derivation and actual↔display conversion
//! - [`player`]: the media element abstraction and gap-skipping driver
//! - [`editor`]: the owned session tying the pieces together, plus the
//!   simulated exports
//! - [`timecode`]: `HH:MM:SS.mmm` parsing and formatting
//! - [`config`]: CLI configuration

pub mod config;
pub mod editor;
pub mod player;
pub mod timecode;
pub mod timeline;
pub mod transcript;

pub use config::Config;
pub use editor::EditorSession;
pub use timeline::{IncludedSegment, SegmentMap};
pub use transcript::{Transcript, TranscriptItem};
