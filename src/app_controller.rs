use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::PairingError;
use crate::file_utils::FileManager;
use crate::remapper;
use crate::segments;
use crate::subtitle_processor::SubtitleTrack;

// @module: Application controller for batch retiming

// @const: First-run-of-digits pairing identifier
static DIGIT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Extract the pairing identifier from a file name: the first run of digits,
/// kept as a string so leading zeros stay significant ("01" never matches "1").
pub fn numeric_id(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy().to_string();
    DIGIT_RUN_REGEX
        .find(&name)
        .map(|m| m.as_str().to_string())
}

/// One segment list matched with the subtitle track sharing its identifier.
#[derive(Debug, Clone)]
pub struct InputPair {
    /// Segment list file
    pub segment_list: PathBuf,

    /// Subtitle track file
    pub track: PathBuf,

    /// Grouping subfolder of the segment list, replicated under the output root
    pub group: String,
}

// @enum: Result of processing one pair
enum PairOutcome {
    Synced { kept: usize, dropped: usize },
    Skipped,
}

/// Main application controller for subtitle retiming
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Pair each segment list with the first subtitle track sharing its
    /// numeric identifier. Returns the pairs in segment-list order plus the
    /// lists that could not be paired; an unpaired list never aborts the run.
    pub fn pair_inputs(
        timecodes_root: &Path,
        segment_lists: &[PathBuf],
        tracks: &[PathBuf],
    ) -> (Vec<InputPair>, Vec<PairingError>) {
        let mut pairs = Vec::new();
        let mut unmatched = Vec::new();

        for segment_list in segment_lists {
            let Some(id) = numeric_id(segment_list) else {
                let e = PairingError::NoIdentifier(segment_list.clone());
                warn!("{}", e);
                unmatched.push(e);
                continue;
            };

            let matched = tracks
                .iter()
                .find(|track| numeric_id(track).as_deref() == Some(id.as_str()));

            match matched {
                Some(track) => {
                    let group = segment_list
                        .parent()
                        .and_then(|parent| parent.strip_prefix(timecodes_root).ok())
                        .map(|rel| rel.to_string_lossy().to_string())
                        .unwrap_or_default();

                    debug!("Paired {:?} -> {:?}", segment_list, track);
                    pairs.push(InputPair {
                        segment_list: segment_list.clone(),
                        track: track.clone(),
                        group,
                    });
                }
                None => {
                    let e = PairingError::NoMatch(segment_list.clone());
                    warn!("{}", e);
                    unmatched.push(e);
                }
            }
        }

        (pairs, unmatched)
    }

    /// Run the batch workflow over every paired segment list and track
    pub async fn run(&self, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        let timecodes_root = PathBuf::from(&self.config.timecodes_dir);
        let subtitles_root = PathBuf::from(&self.config.subtitles_dir);

        if !timecodes_root.exists() {
            return Err(anyhow::anyhow!(
                "Timecodes directory does not exist: {:?}",
                timecodes_root
            ));
        }
        if !subtitles_root.exists() {
            return Err(anyhow::anyhow!(
                "Subtitles directory does not exist: {:?}",
                subtitles_root
            ));
        }

        // Discover inputs (recursive)
        let segment_lists = FileManager::find_files(&timecodes_root, "txt")?;
        let tracks = FileManager::find_files(&subtitles_root, "ass")?;

        if segment_lists.is_empty() {
            return Err(anyhow::anyhow!(
                "No segment lists found in directory: {:?}",
                timecodes_root
            ));
        }
        if tracks.is_empty() {
            return Err(anyhow::anyhow!(
                "No subtitle tracks found in directory: {:?}",
                subtitles_root
            ));
        }

        let (pairs, unmatched) = Self::pair_inputs(&timecodes_root, &segment_lists, &tracks);

        // Create a progress bar for batch processing
        let batch_pb = ProgressBar::new(pairs.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        batch_pb.set_style(template_result.progress_chars("█▓▒░"));
        batch_pb.set_message("Retiming tracks");

        // Pairs share no state, so they can run side by side up to the
        // configured width; the default width of 1 keeps the batch serial.
        let config = Arc::new(self.config.clone());
        let results: Vec<(String, Result<PairOutcome>)> = stream::iter(pairs)
            .map(|pair| {
                let config = Arc::clone(&config);
                let pb = batch_pb.clone();
                async move {
                    let name = pair
                        .track
                        .file_name()
                        .map(|f| f.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    pb.set_message(format!("Processing: {}", name));

                    let outcome = match tokio::task::spawn_blocking(move || {
                        Self::process_pair(&config, &pair, force_overwrite)
                    })
                    .await
                    {
                        Ok(result) => result,
                        Err(e) => Err(anyhow::anyhow!("Worker task failed: {}", e)),
                    };

                    pb.inc(1);
                    (name, outcome)
                }
            })
            .buffer_unordered(self.config.sync.concurrent_pairs)
            .collect()
            .await;

        // Finish the batch progress bar
        batch_pb.finish_with_message("Batch processing complete");

        // Track success and failure counts
        let mut success_count = 0;
        let mut skip_count = 0;
        let mut error_count = 0;

        for (name, outcome) in &results {
            match outcome {
                Ok(PairOutcome::Synced { kept, dropped }) => {
                    debug!("{}: {} kept, {} dropped", name, kept, dropped);
                    success_count += 1;
                }
                Ok(PairOutcome::Skipped) => skip_count += 1,
                Err(e) => {
                    error!("Error processing pair {}: {}", name, e);
                    error_count += 1;
                }
            }
        }

        let duration = start_time.elapsed();

        // Give summary results - important for batch operations
        let summary_message = format!(
            "Batch processing completed: {} synced, {} skipped, {} unmatched, {} errors",
            success_count,
            skip_count,
            unmatched.len(),
            error_count
        );
        info!("{}", summary_message);

        // Write summary to log file
        let log_file_path = PathBuf::from(&self.config.output_dir).join("subrecut.issues.log");
        if let Err(e) = Self::write_summary_log(
            &log_file_path,
            &summary_message,
            &unmatched,
            Self::format_duration(duration),
        ) {
            warn!("Failed to write batch logs to file: {}", e);
        } else {
            info!("Batch processing logs written to {}", log_file_path.display());
        }

        Ok(())
    }

    /// Retime one paired input and write the result under the output root
    fn process_pair(config: &Config, pair: &InputPair, force_overwrite: bool) -> Result<PairOutcome> {
        let output_path =
            FileManager::generate_output_path(&pair.track, &config.output_dir, &pair.group);

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                pair.track
            );
            return Ok(PairOutcome::Skipped);
        }

        debug!("Processing: {:?} -> {:?}", pair.segment_list, pair.track);

        let segment_list = segments::read_segment_list(&pair.segment_list)?;
        let track = SubtitleTrack::from_file(&pair.track)?;
        let before = track.dialogue_count();

        let retimed = remapper::retime_track(&track, &segment_list, &config.sync.tolerances());
        let kept = retimed.dialogue_count();

        retimed.write_to_file(&output_path)?;
        info!("Success: {}", output_path.display());

        Ok(PairOutcome::Synced {
            kept,
            dropped: before - kept,
        })
    }

    /// Write the batch summary and any unmatched segment lists to a log file
    fn write_summary_log(
        file_path: &Path,
        summary: &str,
        unmatched: &[PairingError],
        duration: String,
    ) -> Result<()> {
        let mut log_content = String::new();

        // Add header
        log_content.push_str(&format!(
            "Retiming Log - {}\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        log_content.push_str(&format!("[INFO] {} - Duration: {}\n", summary, duration));

        for pairing_error in unmatched {
            log_content.push_str(&format!("[WARN] {}\n", pairing_error));
        }

        FileManager::write_to_file(file_path, &log_content)?;

        Ok(())
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
