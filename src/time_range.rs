/*!
 * Rewriting of `START --> END` time-range lines.
 *
 * A time-range line is shifted as a unit. The outcome depends on which
 * endpoints survive the shift:
 *
 * | start   | end     | output                      |
 * |---------|---------|-----------------------------|
 * | deleted | deleted | deleted                     |
 * | deleted | kept    | `00:00:00.000 --> <end>`    |
 * | kept    | kept    | `<start> --> <end>`         |
 * | kept    | deleted | deleted                     |
 *
 * The last row cannot happen for well-formed input (end is never before
 * start) and drops the whole block.
 */

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimecodeError;
use crate::timecode::{Offset, Shifted, Timecode};

// @const: Canonical time-range regex (START --> END)
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3})").unwrap()
});

/// Arrow between the two timestamps of a time-range line
pub const RANGE_ARROW: &str = " --> ";

/// Start and end of one subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Timecode,
    pub end: Timecode,
}

/// Result of shifting a whole time range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeShift {
    /// Both endpoints survived
    Kept(TimeRange),
    /// Start went negative and was clamped to zero
    ForcedStart(TimeRange),
    /// The subtitle now ends before the movie starts
    Deleted,
}

/// A time-range line after shifting, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    /// Rewritten line, terminator included
    Shifted(String),
    /// Rewritten line whose start was clamped to zero, terminator included
    ForcedStart(String),
    /// Marker telling the converter to drop the whole subtitle block
    Deleted,
}

impl RenderedLine {
    /// Text to write, if the line survived
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderedLine::Shifted(text) | RenderedLine::ForcedStart(text) => Some(text),
            RenderedLine::Deleted => None,
        }
    }
}

impl TimeRange {
    pub fn new(start: Timecode, end: Timecode) -> Self {
        Self { start, end }
    }

    /// Parse a canonical `HH:MM:SS.mmm --> HH:MM:SS.mmm` line.
    ///
    /// Anything after the end timestamp (cue settings) is ignored.
    pub fn parse(line: &str) -> Result<Self, TimecodeError> {
        let caps = TIME_RANGE_REGEX
            .captures(line)
            .ok_or_else(|| TimecodeError::InvalidRange(line.to_string()))?;

        Ok(Self {
            start: caps[1].parse()?,
            end: caps[2].parse()?,
        })
    }

    /// Move both endpoints by `offset`
    pub fn shift(&self, offset: Offset) -> RangeShift {
        match (self.start.shift(offset), self.end.shift(offset)) {
            (Shifted::Kept(start), Shifted::Kept(end)) => RangeShift::Kept(TimeRange::new(start, end)),
            (Shifted::Deleted, Shifted::Kept(end)) => {
                RangeShift::ForcedStart(TimeRange::new(Timecode::ZERO, end))
            }
            (_, Shifted::Deleted) => RangeShift::Deleted,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, RANGE_ARROW, self.end)
    }
}

/// Split a line into its content and its terminator (`\r\n`, `\n` or nothing)
pub fn split_line_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Shift a canonical time-range line by `offset`.
///
/// The line terminator of the input is kept; an unterminated line gets `\n`.
pub fn transform_time_range_line(line: &str, offset: Offset) -> Result<RenderedLine, TimecodeError> {
    let (body, terminator) = split_line_terminator(line);
    let terminator = if terminator.is_empty() { "\n" } else { terminator };

    let range = TimeRange::parse(body)?;

    Ok(match range.shift(offset) {
        RangeShift::Kept(shifted) => RenderedLine::Shifted(format!("{}{}", shifted, terminator)),
        RangeShift::ForcedStart(shifted) => {
            RenderedLine::ForcedStart(format!("{}{}", shifted, terminator))
        }
        RangeShift::Deleted => RenderedLine::Deleted,
    })
}
