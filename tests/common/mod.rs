/*!
 * Common test utilities for the submod test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample WebVTT content (period decimal separator)
pub const SAMPLE_VTT: &str = "WEBVTT

1
00:00:00.243 --> 00:00:02.110
Previously on ...

2
00:00:03.802 --> 00:00:05.314
Etc.

3
00:00:08.000 --> 00:00:15.500
First line
Second line

4
00:01:59.900 --> 00:02:01.000
Last one.
";

/// Sample SubRip content (comma decimal separator)
pub const SAMPLE_SRT: &str = "1
00:00:00,243 --> 00:00:02,110
Previously on ...

2
00:00:03,802 --> 00:00:05,314
Etc.

3
00:00:08,000 --> 00:00:15,500
First line
Second line

4
00:01:59,900 --> 00:02:01,000
Last one.
";

/// Creates a sample subtitle file of the format matching `filename`
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = if filename.ends_with(".vtt") { SAMPLE_VTT } else { SAMPLE_SRT };
    create_test_file(dir, filename, content)
}
