use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::remapper::Tolerances;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the subtitle tracks to retime
    #[serde(default = "default_subtitles_dir")]
    pub subtitles_dir: String,

    /// Directory holding the segment lists, one grouping subfolder per batch
    #[serde(default = "default_timecodes_dir")]
    pub timecodes_dir: String,

    /// Root directory for retimed output, mirroring the grouping subfolders
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Sync config
    #[serde(default)]
    pub sync: SyncConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Retiming behavior settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SyncConfig {
    // @field: Lead-in window before a segment's source start (ms)
    #[serde(default = "default_lead_in_ms")]
    pub lead_in_ms: i64,

    // @field: Allowed overrun past the source end for lead-in cues (ms)
    #[serde(default = "default_end_overrun_ms")]
    pub end_overrun_ms: i64,

    // @field: Late-tail window before the source end (ms)
    #[serde(default = "default_tail_window_ms")]
    pub tail_window_ms: i64,

    // @field: Overrun past the source end that rejects a late-tail cue (ms)
    #[serde(default = "default_tail_overrun_ms")]
    pub tail_overrun_ms: i64,

    // @field: Input pairs processed at once
    #[serde(default = "default_concurrent_pairs")]
    pub concurrent_pairs: usize,
}

impl SyncConfig {
    // @returns: Edge tolerances for the remapper
    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            lead_in_ms: self.lead_in_ms,
            end_overrun_ms: self.end_overrun_ms,
            tail_window_ms: self.tail_window_ms,
            tail_overrun_ms: self.tail_overrun_ms,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            lead_in_ms: default_lead_in_ms(),
            end_overrun_ms: default_end_overrun_ms(),
            tail_window_ms: default_tail_window_ms(),
            tail_overrun_ms: default_tail_overrun_ms(),
            concurrent_pairs: default_concurrent_pairs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_subtitles_dir() -> String {
    "subtitles".to_string()
}

fn default_timecodes_dir() -> String {
    "timecodes".to_string()
}

fn default_output_dir() -> String {
    "synced".to_string()
}

fn default_lead_in_ms() -> i64 {
    1000
}

fn default_end_overrun_ms() -> i64 {
    200
}

fn default_tail_window_ms() -> i64 {
    200
}

fn default_tail_overrun_ms() -> i64 {
    2000
}

fn default_concurrent_pairs() -> usize {
    1 // Pairs share no state; raise to process several at once
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.subtitles_dir.is_empty() {
            return Err(anyhow!("subtitles_dir must not be empty"));
        }
        if self.timecodes_dir.is_empty() {
            return Err(anyhow!("timecodes_dir must not be empty"));
        }
        if self.output_dir.is_empty() {
            return Err(anyhow!("output_dir must not be empty"));
        }

        if self.sync.lead_in_ms < 0
            || self.sync.end_overrun_ms < 0
            || self.sync.tail_window_ms < 0
            || self.sync.tail_overrun_ms < 0
        {
            return Err(anyhow!("Sync tolerances must be non-negative"));
        }

        if self.sync.concurrent_pairs == 0 {
            return Err(anyhow!("concurrent_pairs must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            subtitles_dir: default_subtitles_dir(),
            timecodes_dir: default_timecodes_dir(),
            output_dir: default_output_dir(),
            sync: SyncConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
