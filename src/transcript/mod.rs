//! Transcript format parser and writer.
//!
//! The human-editable serialization is line oriented: each line is
//! `[<start> - <end>] <text>` with `HH:MM:SS.mmm` timecodes. A line whose
//! text trims to empty marks that span as removed from playback (silence,
//! excised dialogue, or a blanked trim range). Lines that do not match the
//! pattern are dropped silently; parsing never fails.
//!
//! Items are normalized on construction (sorted by start, overlaps clamped)
//! so the timeline derivation can assume sorted, non-overlapping input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::timecode::{format_timecode, parse_timecode};

/// A time-stamped line of transcript text, in the original media's time base
/// (seconds). `start <= end` after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptItem {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl TranscriptItem {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// A span removed from playback: empty or whitespace-only text.
    pub fn is_removed(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Parse a single editable line. Returns `None` if the line does not
    /// match `[<start> - <end>] <text>`.
    fn parse_line(line: &str) -> Option<Self> {
        let rest = line.trim_start().strip_prefix('[')?;
        let (times, text) = rest.split_once(']')?;
        let (start, end) = times.split_once(" - ")?;

        let start = parse_timecode(start)?;
        let end = parse_timecode(end)?;

        // A single space separates the bracket from the text; further
        // leading whitespace is part of the text (word timestamps often
        // carry one).
        let text = text.strip_prefix(' ').unwrap_or(text);

        Some(Self::new(start, end, text))
    }

    fn to_line(&self) -> String {
        format!(
            "[{} - {}] {}",
            format_timecode(self.start),
            format_timecode(self.end),
            self.text
        )
    }
}

/// Serialized form of an item in the export document: timecodes as strings.
#[derive(Debug, Serialize)]
struct ExportItem<'a> {
    start: String,
    end: String,
    text: &'a str,
}

/// An ordered, normalized collection of transcript items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    items: Vec<TranscriptItem>,
}

impl Transcript {
    /// Build a transcript from raw items, normalizing order and overlaps.
    pub fn new(items: Vec<TranscriptItem>) -> Self {
        let mut transcript = Self { items };
        transcript.normalize();
        transcript
    }

    /// Parse the editable line format. Malformed lines are dropped silently.
    pub fn parse_str(content: &str) -> Self {
        let mut items = Vec::new();
        let mut dropped = 0usize;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match TranscriptItem::parse_line(line) {
                Some(item) => items.push(item),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(dropped, "dropped malformed transcript lines");
        }

        Self::new(items)
    }

    /// Read and parse a transcript file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        Ok(Self::parse_str(&content))
    }

    /// Write the editable line format to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_editable())
            .with_context(|| format!("Failed to write transcript: {}", path.display()))
    }

    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize back to the editable line format, one item per line.
    pub fn to_editable(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            out.push_str(&item.to_line());
            out.push('\n');
        }
        out
    }

    /// Serialize to the export document: a pretty-printed JSON array of
    /// `{start, end, text}` with timecodes re-serialized as strings.
    /// Removed (empty-text) items are included.
    pub fn to_export_json(&self) -> Result<String> {
        let items: Vec<ExportItem<'_>> = self
            .items
            .iter()
            .map(|item| ExportItem {
                start: format_timecode(item.start),
                end: format_timecode(item.end),
                text: &item.text,
            })
            .collect();

        serde_json::to_string_pretty(&items).context("Failed to serialize transcript")
    }

    /// Exclude the actual-time range `[from, to]` from playback.
    ///
    /// Items are split at the range boundaries: the portion inside the range
    /// becomes a zero-text (removed) item, portions outside keep their text.
    /// This is the general multi-segment trim; a single-range trim is just
    /// one more excluded span.
    pub fn blank_range(&mut self, from: f64, to: f64) {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };

        let mut result = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            if item.end <= from || item.start >= to {
                result.push(item);
                continue;
            }

            let cut_start = item.start.max(from);
            let cut_end = item.end.min(to);

            if cut_start > item.start {
                result.push(TranscriptItem::new(item.start, cut_start, item.text.clone()));
            }
            result.push(TranscriptItem::new(cut_start, cut_end, ""));
            if cut_end < item.end {
                result.push(TranscriptItem::new(cut_end, item.end, item.text.clone()));
            }
        }

        self.items = result;
        self.normalize();
    }

    /// Sort by start time and clamp overlaps.
    ///
    /// An item overlapping its predecessor has its start clamped to the
    /// predecessor's end; a fully-covered item degenerates to zero duration
    /// and contributes nothing downstream. Items with `end < start` are
    /// clamped to zero duration as well.
    fn normalize(&mut self) {
        self.items.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut prev_end = 0.0f64;
        for item in &mut self.items {
            if item.end < item.start {
                item.end = item.start;
            }
            if item.start < prev_end {
                item.start = prev_end.min(item.end);
            }
            if item.end < item.start {
                item.end = item.start;
            }
            prev_end = item.end.max(prev_end);
        }
    }
}
