/*!
 * Error types for the submod application.
 *
 * This module contains custom error types for the different layers of the
 * shifter, using the thiserror crate for ergonomic error definitions:
 * - `TimecodeError` for a single timestamp or time-range line
 * - `ConversionError` for a whole subtitle stream
 * - `AppError` for one invocation of the tool
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing a timestamp or a time-range line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    /// Text does not have the fixed-width `HH:MM:SS.mmm` shape
    #[error("Invalid timestamp format: '{0}'")]
    InvalidFormat(String),

    /// Minutes or seconds field is out of range
    #[error("Invalid time components in timestamp: '{0}'")]
    OutOfRange(String),

    /// Line does not have the `START --> END` shape
    #[error("Invalid time range: '{0}'")]
    InvalidRange(String),

    /// Offset is NaN or infinite
    #[error("Offset must be a finite number of seconds, got {0}")]
    NonFiniteOffset(f64),
}

/// Errors that can occur while converting a subtitle stream
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A line looked like a time range but could not be parsed
    #[error("Malformed time line at line {line_number}: '{line}' ({source})")]
    MalformedTimeLine {
        /// 1-based line number in the input
        line_number: usize,
        /// Offending line without its terminator
        line: String,
        /// Underlying parse failure
        source: TimecodeError,
    },

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that stop one invocation before any output is written
#[derive(Error, Debug)]
pub enum AppError {
    /// Input path does not point to an existing file
    #[error("Please specify an existing file as input: {0:?}")]
    InvalidInputPath(PathBuf),

    /// Input file is neither `.srt` nor `.vtt`
    #[error("Please specify either an .srt or .vtt file as input: {0:?}")]
    UnsupportedExtension(PathBuf),

    /// The derived output name is the input itself
    #[error("Output file would overwrite the input file: {0:?}")]
    OutputIsInput(PathBuf),

    /// Error with the offset or a timestamp
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
