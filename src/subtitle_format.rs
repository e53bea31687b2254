use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::timecode::CANONICAL_SEPARATOR;

// @module: Format-specific recognition of time-range lines

// @const: SRT time line prefix (comma separator)
static SRT_TIME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}").unwrap()
});

// @const: WebVTT time line prefix (period separator)
static VTT_TIME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}").unwrap()
});

/// Supported subtitle formats.
///
/// Both share the same block layout and differ only in the sub-second
/// decimal separator of the time-range line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    /// SubRip, `00:00:01,000`
    Srt,
    /// WebVTT, `00:00:01.000`
    Vtt,
}

impl SubtitleFormat {
    /// Pick the format from a file extension (case-insensitive, without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "srt" => Some(Self::Srt),
            "vtt" => Some(Self::Vtt),
            _ => None,
        }
    }

    /// Pick the format from the extension of `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    // @returns: Lowercase extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }

    // @returns: Sub-second decimal separator used on disk
    pub fn decimal_separator(&self) -> char {
        match self {
            Self::Srt => ',',
            Self::Vtt => '.',
        }
    }

    /// Whether `line` starts with a timestamp in this format
    pub fn is_time_range_line(&self, line: &str) -> bool {
        match self {
            Self::Srt => SRT_TIME_LINE_REGEX.is_match(line),
            Self::Vtt => VTT_TIME_LINE_REGEX.is_match(line),
        }
    }

    /// Rewrite a time-range line with the canonical `.` separator
    pub fn to_canonical<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let separator = self.decimal_separator();
        if separator == CANONICAL_SEPARATOR {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(line.replace(separator, &CANONICAL_SEPARATOR.to_string()))
        }
    }

    /// Rewrite a canonical time-range line with this format's separator
    pub fn from_canonical(&self, line: String) -> String {
        let separator = self.decimal_separator();
        if separator == CANONICAL_SEPARATOR {
            line
        } else {
            line.replace(CANONICAL_SEPARATOR, &separator.to_string())
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| anyhow!("Unsupported subtitle format: {}", s))
    }
}
