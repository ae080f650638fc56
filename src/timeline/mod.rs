//! Gap-free display timeline derived from a transcript.
//!
//! Removed transcript spans are contracted out of the timeline presented to
//! the user: "actual" time addresses the original media, "display" time
//! addresses the virtual timeline with the gaps removed. [`SegmentMap`] owns
//! the derived segments and converts between the two bases in both
//! directions.
//!
//! The map is a pure derivation: it is recomputed in full (a single O(n)
//! pass) on every transcript mutation, never updated incrementally.

use crate::transcript::Transcript;

/// A contiguous actual-time span that survives editing, with its position on
/// the display timeline. Segments are non-overlapping in both bases and
/// contiguous in display time (`display_end[i] == display_start[i+1]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncludedSegment {
    /// Actual-time span on the original media.
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    /// Position on the gap-free display timeline.
    pub display_start: f64,
    pub display_end: f64,
}

impl IncludedSegment {
    /// Whether this segment covers the given actual time (`end` inclusive,
    /// so the boundary can be detected by the playback driver).
    pub fn covers(&self, actual: f64) -> bool {
        actual >= self.start && actual <= self.end
    }
}

/// The ordered set of included segments plus the total display duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentMap {
    segments: Vec<IncludedSegment>,
    total_display_duration: f64,
}

impl SegmentMap {
    /// Derive the map from a transcript.
    ///
    /// Items with non-empty text each emit one segment; removed items are
    /// skipped entirely and neither contribute display time nor appear in
    /// the list. The running accumulator becomes the total display duration.
    pub fn derive(transcript: &Transcript) -> Self {
        let mut cumulative_display_time = 0.0f64;
        let mut segments = Vec::new();

        for item in transcript.items() {
            if item.is_removed() {
                continue;
            }
            let duration = item.duration();
            segments.push(IncludedSegment {
                start: item.start,
                end: item.end,
                duration,
                display_start: cumulative_display_time,
                display_end: cumulative_display_time + duration,
            });
            cumulative_display_time += duration;
        }

        Self {
            segments,
            total_display_duration: cumulative_display_time,
        }
    }

    pub fn segments(&self) -> &[IncludedSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of all included segment durations; the upper bound of the
    /// display-time scrub range.
    pub fn total_display_duration(&self) -> f64 {
        self.total_display_duration
    }

    /// Map an actual media time to display time.
    ///
    /// Time inside a gap maps to the accumulated display time at the gap
    /// boundary (not an interpolated value); time beyond the last segment
    /// maps to the total display duration.
    pub fn to_display(&self, actual: f64) -> f64 {
        let mut accumulated = 0.0f64;
        for segment in &self.segments {
            if actual < segment.start {
                break;
            }
            if actual <= segment.end {
                return segment.display_start + (actual - segment.start);
            }
            accumulated += segment.duration;
        }
        accumulated
    }

    /// Map a display time back to actual media time.
    ///
    /// Display targets past the end clamp to the last segment's actual end
    /// (or 0 with no segments); a target preceding a segment's display start
    /// clamps to that segment's actual start rather than landing inside a
    /// skipped span.
    pub fn to_actual(&self, display: f64) -> f64 {
        for segment in &self.segments {
            if display < segment.display_start {
                return segment.start;
            }
            if display <= segment.display_end {
                return segment.start + (display - segment.display_start);
            }
        }
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }

    /// Index of the segment covering the given actual time, if any.
    pub fn segment_index_at(&self, actual: f64) -> Option<usize> {
        self.segments.iter().position(|s| s.covers(actual))
    }

    /// The segment covering the given actual time, if any.
    pub fn segment_at(&self, actual: f64) -> Option<&IncludedSegment> {
        self.segment_index_at(actual).map(|i| &self.segments[i])
    }

    /// The first segment starting strictly after the given actual time.
    pub fn next_segment_after(&self, actual: f64) -> Option<&IncludedSegment> {
        self.segments.iter().find(|s| s.start > actual)
    }
}
