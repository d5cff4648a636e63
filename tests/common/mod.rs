/*!
 * Common test utilities for the subrecut test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle track for testing
pub fn create_test_track(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_TRACK)
}

/// Creates a sample segment list for testing
pub fn create_test_segment_list(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SEGMENT_LIST)
}

/// A small track: header, styles, three dialogue lines inside the sample
/// segment's source span, and one dialogue line outside it.
pub const SAMPLE_TRACK: &str = "[Script Info]\n\
Title: Sample episode\n\
ScriptType: v4.00+\n\
\n\
[V4+ Styles]\n\
Format: Name, Fontname, Fontsize\n\
Style: Default,Arial,20\n\
\n\
[Events]\n\
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
Dialogue: 0,0:01:05.00,0:01:07.00,Default,,0,0,0,,First line\n\
Dialogue: 0,0:01:07.50,0:01:09.00,Default,,0,0,0,,Second line\n\
Dialogue: 0,0:01:09.20,0:01:09.90,Default,,0,0,0,,Third line\n\
Dialogue: 0,0:05:00.00,0:05:02.00,Default,,0,0,0,,Cut line\n";

/// One segment moving source [0:01:00, 0:01:10) to timeline [0:00:10, 0:00:20)
pub const SAMPLE_SEGMENT_LIST: &str = "Timeline Start\tTimeline End\tSource Start\tSource End\n\
0:00:10.00\t0:00:20.00\t0:01:00.00\t0:01:10.00\n";
