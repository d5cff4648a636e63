use log::debug;

use crate::segments::Segment;
use crate::subtitle_processor::{DialogueEntry, SubtitleTrack, TrackLine};
use crate::timecode;

// @module: Dialogue classification and track reassembly

/// Outcome of classifying one dialogue cue against the segment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The cue survives the cut with these new times
    Keep {
        /// New start time in ms
        start_ms: i64,
        /// New end time in ms
        end_ms: i64,
    },
    /// The cue falls outside the re-edit and is discarded
    Drop,
}

/// Edge tolerances for the classification rules, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerances {
    /// How far before a segment's source start a cue may begin and still
    /// attach to that segment
    pub lead_in_ms: i64,

    /// How far past the segment's source end an early-lead-in cue may run
    /// before it is discarded
    pub end_overrun_ms: i64,

    /// Width of the window at the segment's source end that triggers the
    /// late-tail check
    pub tail_window_ms: i64,

    /// How far past the source end a late-tail cue must run to be discarded
    pub tail_overrun_ms: i64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            lead_in_ms: 1000,
            end_overrun_ms: 200,
            tail_window_ms: 200,
            tail_overrun_ms: 2000,
        }
    }
}

/// Classify one cue against the segments in list order.
///
/// The first segment for which any rule matches decides the outcome and the
/// scan stops there, even when a later segment would also match. List order
/// is priority; there is no notion of a best match.
pub fn classify(start_ms: i64, end_ms: i64, segments: &[Segment], tol: &Tolerances) -> Decision {
    for segment in segments {
        let delta = segment.delta();

        // Cue starts inside the segment's source span
        if segment.source_start <= start_ms && start_ms < segment.source_end {
            return Decision::Keep {
                start_ms: start_ms + delta,
                end_ms: end_ms + delta,
            };
        }

        // Cue starts shortly before the source span
        if segment.source_start - tol.lead_in_ms <= start_ms && start_ms < segment.source_start {
            if end_ms - segment.source_end > tol.end_overrun_ms {
                return Decision::Drop;
            }
            return Decision::Keep {
                start_ms: start_ms + delta,
                end_ms: end_ms + delta,
            };
        }

        // Cue starts in the final window of the source span but runs far past its end
        if segment.source_end - tol.tail_window_ms <= start_ms
            && start_ms < segment.source_end
            && end_ms >= segment.source_end + tol.tail_overrun_ms
        {
            return Decision::Drop;
        }

        // Cue starts just before the source span and ends inside it: kept at
        // its original times, no shift applied
        if start_ms < segment.source_start
            && segment.source_start - start_ms < tol.lead_in_ms
            && end_ms <= segment.source_end
        {
            return Decision::Keep { start_ms, end_ms };
        }
    }

    Decision::Drop
}

/// Retime a track against a segment list.
///
/// Dialogue cues are classified one by one; dropped cues vanish and the
/// track compresses around them. Survivors are then stably sorted by their
/// new start time at centisecond resolution (the resolution the serialized
/// times carry, so ties keep original relative order) and scattered back
/// into the dialogue slots that remain, in rank order. Pass-through lines
/// never move.
pub fn retime_track(track: &SubtitleTrack, segments: &[Segment], tol: &Tolerances) -> SubtitleTrack {
    let mut lines: Vec<TrackLine> = Vec::with_capacity(track.lines.len());
    let mut dropped = 0usize;

    for line in &track.lines {
        match line {
            TrackLine::Dialogue(entry) => {
                match classify(entry.start_ms, entry.end_ms, segments, tol) {
                    Decision::Keep { start_ms, end_ms } => {
                        lines.push(TrackLine::Dialogue(entry.with_times(start_ms, end_ms)));
                    }
                    Decision::Drop => dropped += 1,
                }
            }
            TrackLine::PassThrough(raw) => lines.push(TrackLine::PassThrough(raw.clone())),
        }
    }

    // Slots are the dialogue positions left after the drops, so slot count
    // and survivor count are equal by construction.
    let mut survivors: Vec<DialogueEntry> = lines
        .iter()
        .filter_map(|line| match line {
            TrackLine::Dialogue(entry) => Some(entry.clone()),
            TrackLine::PassThrough(_) => None,
        })
        .collect();
    survivors.sort_by_key(|entry| timecode::round_to_centis(entry.start_ms));

    let mut sorted = survivors.into_iter();
    for line in lines.iter_mut() {
        if let TrackLine::Dialogue(slot) = line {
            if let Some(next) = sorted.next() {
                *slot = next;
            }
        }
    }

    debug!(
        "Retimed {:?}: {} kept, {} dropped",
        track.source_file,
        lines
            .iter()
            .filter(|line| matches!(line, TrackLine::Dialogue(_)))
            .count(),
        dropped
    );

    SubtitleTrack {
        source_file: track.source_file.clone(),
        lines,
    }
}
