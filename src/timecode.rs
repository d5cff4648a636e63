use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimecodeError;

// @module: Timecode text <-> millisecond conversion

// @const: H:MM:SS.fraction timecode regex (fraction up to microseconds)
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{1,2}):(\d{1,2})\.(\d{1,6})$").unwrap()
});

/// Parse a textual timecode into integer milliseconds.
///
/// Accepts `H:MM:SS.fraction` with unpadded hours and a fractional part of
/// one to six digits, read left-aligned at microsecond resolution: ".5" is
/// 500 ms, ".123456" is floored to 123 ms.
pub fn parse_timestamp(text: &str) -> Result<i64, TimecodeError> {
    let trimmed = text.trim();
    let caps = TIMECODE_REGEX
        .captures(trimmed)
        .ok_or_else(|| TimecodeError::Format(text.to_string()))?;

    let component = |idx: usize| -> Result<i64, TimecodeError> {
        caps[idx]
            .parse::<i64>()
            .map_err(|_| TimecodeError::Format(text.to_string()))
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    if minutes >= 60 || seconds >= 60 {
        return Err(TimecodeError::Format(text.to_string()));
    }

    // Right-pad the fraction to six digits so "5" reads as 500000 us
    let micros: i64 = format!("{:0<6}", &caps[4])
        .parse()
        .map_err(|_| TimecodeError::Format(text.to_string()))?;

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + micros / 1_000)
}

/// Format milliseconds as `H:MM:SS.CC`.
///
/// Centiseconds round half-up; a result of 100 carries into seconds and
/// cascades through minutes and hours. Hours have no upper bound. Values
/// below zero clamp to `0:00:00.00`.
pub fn format_timestamp(ms: i64) -> String {
    let ms = ms.max(0);
    let mut hours = ms / 3_600_000;
    let mut minutes = (ms % 3_600_000) / 60_000;
    let mut seconds = (ms % 60_000) / 1_000;
    let mut centis = (ms % 1_000 + 5) / 10;

    if centis == 100 {
        centis = 0;
        seconds += 1;
        if seconds == 60 {
            seconds = 0;
            minutes += 1;
            if minutes == 60 {
                minutes = 0;
                hours += 1;
            }
        }
    }

    format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

/// Quantize milliseconds to the centisecond grid the textual form carries.
///
/// `parse_timestamp(&format_timestamp(ms))` always equals `round_to_centis(ms)`;
/// the remapper sorts by this value so ordering matches the serialized times.
pub fn round_to_centis(ms: i64) -> i64 {
    (ms.max(0) + 5) / 10 * 10
}
