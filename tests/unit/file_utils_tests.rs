/*!
 * Tests for file utility functions
 */

use std::path::Path;

use anyhow::Result;
use subrecut::file_utils::FileManager;

use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "test_file_exists.tmp",
        "test content",
    )?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists distinguishes directories from files
#[test]
fn test_dir_exists_withDirAndFile_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "plain_file.tmp",
        "content",
    )?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("nested").join("subdir");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.exists());
    assert!(test_subdir.is_dir());

    Ok(())
}

/// Test that generate_output_path mirrors the grouping folder
#[test]
fn test_generate_output_path_withGroup_shouldMirrorGroupFolder() {
    let track = Path::new("/tmp/subs/Episode 01.ass");
    let output_root = Path::new("/tmp/synced");

    let output_path = FileManager::generate_output_path(track, output_root, "Director Cut");

    assert_eq!(
        output_path,
        Path::new("/tmp/synced/Director Cut/Episode 01.ass")
    );
}

/// Test that an empty group writes directly under the output root
#[test]
fn test_generate_output_path_withEmptyGroup_shouldUseOutputRoot() {
    let track = Path::new("/tmp/subs/ep02.ass");
    let output_path = FileManager::generate_output_path(track, "/tmp/synced", "");

    assert_eq!(output_path, Path::new("/tmp/synced/ep02.ass"));
}

/// Test that find_files filters by extension, recursively and case-insensitively
#[test]
fn test_find_files_withMixedTree_shouldReturnMatchingFilesSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();

    common::create_test_file(&root, "b.ass", "")?;
    common::create_test_file(&root, "a.ASS", "")?;
    common::create_test_file(&root, "notes.txt", "")?;
    common::create_test_file(&root, "nested/c.ass", "")?;

    let found = FileManager::find_files(&root, "ass")?;
    let names: Vec<String> = found
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();

    assert_eq!(found.len(), 3);
    assert!(names.contains(&"a.ASS".to_string()));
    assert!(names.contains(&"b.ass".to_string()));
    assert!(names.contains(&"c.ass".to_string()));
    // deterministic order
    let mut sorted = found.clone();
    sorted.sort();
    assert_eq!(found, sorted);

    Ok(())
}

/// Test that write_to_file creates parent directories and read_to_string round-trips
#[test]
fn test_write_and_read_withNestedPath_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("deep").join("output.txt");
    let content = "Hello, World!";

    FileManager::write_to_file(&target, content)?;
    let read_back = FileManager::read_to_string(&target)?;

    assert_eq!(read_back, content);

    Ok(())
}
