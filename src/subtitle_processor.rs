use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::errors::TrackError;
use crate::timecode;

// @module: Subtitle track parsing and serialization

/// Prefix that marks a dialogue cue line.
pub const DIALOGUE_PREFIX: &str = "Dialogue:";

/// Number of comma-delimited fields in a dialogue payload. The first nine
/// commas delimit; the tenth field keeps the remainder, embedded commas,
/// trailing text and line terminator included.
pub const DIALOGUE_FIELD_COUNT: usize = 10;

// @struct: Single dialogue cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEntry {
    // @field: Start time in ms
    pub start_ms: i64,

    // @field: End time in ms
    pub end_ms: i64,

    // @field: The ten raw fields, times re-encoded on render
    fields: Vec<String>,
}

impl DialogueEntry {
    /// Parse a raw `Dialogue:` line. The line terminator, if present, rides
    /// along inside the last field and survives rendering untouched.
    pub fn parse(line: &str) -> Result<Self, TrackError> {
        let fields: Vec<String> = line
            .splitn(DIALOGUE_FIELD_COUNT, ',')
            .map(|field| field.to_string())
            .collect();

        if fields.len() < DIALOGUE_FIELD_COUNT {
            return Err(TrackError::ShortDialogue {
                found: fields.len(),
                expected: DIALOGUE_FIELD_COUNT,
            });
        }

        let start_ms = timecode::parse_timestamp(fields[1].trim())?;
        let end_ms = timecode::parse_timestamp(fields[2].trim())?;

        Ok(DialogueEntry {
            start_ms,
            end_ms,
            fields,
        })
    }

    /// Return a copy carrying new start and end times.
    pub fn with_times(&self, start_ms: i64, end_ms: i64) -> Self {
        DialogueEntry {
            start_ms,
            end_ms,
            fields: self.fields.clone(),
        }
    }

    /// Serialize the cue, re-encoding the two time fields at centisecond
    /// resolution and leaving every other field byte-for-byte intact.
    pub fn render(&self) -> String {
        let mut fields = self.fields.clone();
        fields[1] = timecode::format_timestamp(self.start_ms);
        fields[2] = timecode::format_timestamp(self.end_ms);
        fields.join(",")
    }

    /// The opaque remainder field (style, actor, text and anything after).
    pub fn payload(&self) -> &str {
        &self.fields[DIALOGUE_FIELD_COUNT - 1]
    }
}

impl fmt::Display for DialogueEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// One line of a track: a parsed dialogue cue, or anything else kept verbatim.
///
/// Dialogue lines whose payload is too short or whose time fields do not
/// parse are demoted to `PassThrough` so a malformed cue never aborts the
/// file and never loses its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackLine {
    /// A dialogue cue eligible for retiming
    Dialogue(DialogueEntry),
    /// Header, style, comment or blank line, preserved byte-for-byte
    PassThrough(String),
}

/// A whole subtitle track in original line order.
#[derive(Debug, Clone)]
pub struct SubtitleTrack {
    /// Source filename
    pub source_file: PathBuf,

    /// Track lines in file order
    pub lines: Vec<TrackLine>,
}

impl SubtitleTrack {
    /// Parse track content. Line terminators stay attached to their lines so
    /// rendering reproduces pass-through content exactly.
    pub fn parse_str(content: &str, source_file: PathBuf) -> Self {
        let mut lines = Vec::new();

        for raw in content.split_inclusive('\n') {
            if raw.starts_with(DIALOGUE_PREFIX) {
                match DialogueEntry::parse(raw) {
                    Ok(entry) => lines.push(TrackLine::Dialogue(entry)),
                    Err(e) => {
                        warn!("Keeping unparsed dialogue line verbatim: {}", e);
                        lines.push(TrackLine::PassThrough(raw.to_string()));
                    }
                }
            } else {
                lines.push(TrackLine::PassThrough(raw.to_string()));
            }
        }

        let track = SubtitleTrack { source_file, lines };
        debug!(
            "Parsed track with {} dialogue lines out of {} total",
            track.dialogue_count(),
            track.lines.len()
        );
        track
    }

    /// Read and parse a track file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle track: {:?}", path))?;
        Ok(Self::parse_str(&content, path.to_path_buf()))
    }

    /// Count of parsed dialogue lines.
    pub fn dialogue_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, TrackLine::Dialogue(_)))
            .count()
    }

    /// Serialize the whole track.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                TrackLine::Dialogue(entry) => out.push_str(&entry.render()),
                TrackLine::PassThrough(raw) => out.push_str(raw),
            }
        }
        out
    }

    /// Write the track to a file, creating parent directories as needed.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, self.render())
            .with_context(|| format!("Failed to write subtitle track: {}", path.display()))?;

        Ok(())
    }
}
