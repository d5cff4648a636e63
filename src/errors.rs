/*!
 * Error types for the subrecut application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when converting between textual timecodes and milliseconds
#[derive(Error, Debug)]
pub enum TimecodeError {
    /// The text does not match the H:MM:SS.fraction structure
    #[error("Invalid timecode: {0}")]
    Format(String),
}

/// Errors that can occur while reading a subtitle track
#[derive(Error, Debug)]
pub enum TrackError {
    /// A dialogue payload had fewer comma-delimited fields than expected
    #[error("Dialogue line has {found} fields, expected {expected}")]
    ShortDialogue {
        /// Fields actually present
        found: usize,
        /// Fields required
        expected: usize,
    },

    /// A dialogue time field failed to parse
    #[error("Dialogue timecode: {0}")]
    Timecode(#[from] TimecodeError),
}

/// Errors raised while pairing segment lists with subtitle tracks
#[derive(Error, Debug)]
pub enum PairingError {
    /// No subtitle track shares the segment list's numeric identifier
    #[error("No matching subtitle track for segment list: {0:?}")]
    NoMatch(PathBuf),

    /// The segment list filename carries no numeric identifier at all
    #[error("No numeric identifier in segment list filename: {0:?}")]
    NoIdentifier(PathBuf),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timecode conversion
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from subtitle track processing
    #[error("Track error: {0}")]
    Track(#[from] TrackError),

    /// Error from input pairing
    #[error("Pairing error: {0}")]
    Pairing(#[from] PairingError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
