use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::timecode;

// @module: Timecode segment lists exported from the re-edit

/// Header markers that identify column-caption lines in a segment list.
/// A line containing any of them is skipped wherever it appears.
const HEADER_MARKERS: [&str; 4] = [
    "Timeline Start",
    "Timeline End",
    "Source Start",
    "Source End",
];

/// One correspondence between a span of original source time and a span of
/// new timeline time. All fields are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Where the span begins on the new timeline
    pub timeline_start: i64,

    /// Where the span ends on the new timeline
    pub timeline_end: i64,

    /// Where the span begins in the original source
    pub source_start: i64,

    /// Where the span ends in the original source
    pub source_end: i64,
}

impl Segment {
    /// Shift applied to dialogue matched against this segment.
    pub fn delta(&self) -> i64 {
        self.timeline_start - self.source_start
    }
}

/// Parse one row of a segment list.
///
/// A row qualifies only if it has at least four whitespace-separated tokens
/// and the first four all parse as timecodes; header lines and anything else
/// yield `None`.
fn parse_row(line: &str) -> Option<Segment> {
    if HEADER_MARKERS.iter().any(|marker| line.contains(marker)) {
        return None;
    }

    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 4 {
        return None;
    }

    Some(Segment {
        timeline_start: timecode::parse_timestamp(columns[0]).ok()?,
        timeline_end: timecode::parse_timestamp(columns[1]).ok()?,
        source_start: timecode::parse_timestamp(columns[2]).ok()?,
        source_end: timecode::parse_timestamp(columns[3]).ok()?,
    })
}

/// Parse a whole segment list, preserving file order.
///
/// File order encodes match priority for the remapper, so no sorting or
/// de-duplication happens here. Rows that fail to qualify are dropped
/// silently, matching the loose format the editing tools export.
pub fn parse_segment_list(content: &str) -> Vec<Segment> {
    let segments: Vec<Segment> = content.lines().filter_map(parse_row).collect();
    debug!("Parsed {} segments", segments.len());
    segments
}

/// Read and parse a segment list file.
pub fn read_segment_list<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read segment list: {:?}", path))?;

    let segments = parse_segment_list(&content);
    if segments.is_empty() {
        warn!("No usable segments in {:?}, every dialogue line will be dropped", path);
    }

    Ok(segments)
}
