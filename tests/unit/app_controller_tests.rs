/*!
 * Tests for input pairing and the batch controller
 */

use std::path::{Path, PathBuf};

use subrecut::app_controller::{numeric_id, Controller};
use subrecut::errors::PairingError;

/// Test that numeric_id extracts the first run of digits from the file name
#[test]
fn test_numeric_id_withDigitsInName_shouldExtractFirstRun() {
    assert_eq!(
        numeric_id(Path::new("cuts/Show S01E03 v2.txt")),
        Some("01".to_string())
    );
    assert_eq!(
        numeric_id(Path::new("Episode 12.ass")),
        Some("12".to_string())
    );
}

/// Test that a name without digits yields no identifier
#[test]
fn test_numeric_id_withNoDigits_shouldReturnNone() {
    assert_eq!(numeric_id(Path::new("opening.ass")), None);
}

/// Test that directory components never contribute digits
#[test]
fn test_numeric_id_withDigitsOnlyInDirectory_shouldIgnoreThem() {
    assert_eq!(numeric_id(Path::new("season2/opening.ass")), None);
}

/// Test pairing by equal digit strings
#[test]
fn test_pair_inputs_withMatchingIds_shouldPairListWithTrack() {
    let root = PathBuf::from("timecodes");
    let segment_lists = vec![PathBuf::from("timecodes/cut-a/ep 02 segments.txt")];
    let tracks = vec![
        PathBuf::from("subtitles/Episode 01.ass"),
        PathBuf::from("subtitles/Episode 02.ass"),
    ];

    let (pairs, unmatched) = Controller::pair_inputs(&root, &segment_lists, &tracks);

    assert!(unmatched.is_empty());
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].track, PathBuf::from("subtitles/Episode 02.ass"));
    assert_eq!(pairs[0].group, "cut-a");
}

/// Test that identifiers compare as strings, so leading zeros matter
#[test]
fn test_pair_inputs_withLeadingZeroMismatch_shouldNotPair() {
    let root = PathBuf::from("timecodes");
    let segment_lists = vec![PathBuf::from("timecodes/cut-a/ep 1.txt")];
    let tracks = vec![PathBuf::from("subtitles/Episode 01.ass")];

    let (pairs, unmatched) = Controller::pair_inputs(&root, &segment_lists, &tracks);

    assert!(pairs.is_empty());
    assert_eq!(unmatched.len(), 1);
    assert!(matches!(unmatched[0], PairingError::NoMatch(_)));
}

/// Test that a segment list without digits is reported, not fatal
#[test]
fn test_pair_inputs_withNoIdentifier_shouldReportAndContinue() {
    let root = PathBuf::from("timecodes");
    let segment_lists = vec![
        PathBuf::from("timecodes/cut-a/notes.txt"),
        PathBuf::from("timecodes/cut-a/ep 03.txt"),
    ];
    let tracks = vec![PathBuf::from("subtitles/Episode 03.ass")];

    let (pairs, unmatched) = Controller::pair_inputs(&root, &segment_lists, &tracks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(unmatched.len(), 1);
    assert!(matches!(unmatched[0], PairingError::NoIdentifier(_)));
}

/// Test that the first track in discovery order wins when several share an id
#[test]
fn test_pair_inputs_withSeveralCandidateTracks_shouldUseFirst() {
    let root = PathBuf::from("timecodes");
    let segment_lists = vec![PathBuf::from("timecodes/cut-a/ep 04.txt")];
    let tracks = vec![
        PathBuf::from("subtitles/04 - first candidate.ass"),
        PathBuf::from("subtitles/Episode 04 alt.ass"),
    ];

    let (pairs, _unmatched) = Controller::pair_inputs(&root, &segment_lists, &tracks);

    assert_eq!(pairs.len(), 1);
    assert_eq!(
        pairs[0].track,
        PathBuf::from("subtitles/04 - first candidate.ass")
    );
}

/// Test that nested grouping folders are preserved relative to the root
#[test]
fn test_pair_inputs_withNestedGroup_shouldKeepRelativePath() {
    let root = PathBuf::from("timecodes");
    let segment_lists = vec![PathBuf::from("timecodes/cut-a/part1/ep 05.txt")];
    let tracks = vec![PathBuf::from("subtitles/Episode 05.ass")];

    let (pairs, _unmatched) = Controller::pair_inputs(&root, &segment_lists, &tracks);

    assert_eq!(pairs[0].group, format!("cut-a{}part1", std::path::MAIN_SEPARATOR));
}
