/*!
 * Output file naming.
 *
 * A shifted file is named after its source with an offset tag in front,
 * e.g. `{+2.50_Sec}_movie.srt`. Shifting an already tagged file updates the
 * tag with the cumulative offset instead of stacking a second one, so
 * `{+2.50_Sec}_movie.srt` shifted by -0.5 becomes `{+2.00_Sec}_movie.srt`.
 */

use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::timecode::Offset;

// @const: Leading offset tag regex ({+2.50_Sec}_)
static OFFSET_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{([+-][0-9]+\.[0-9]+)_Sec\}_").unwrap()
});

/// Cumulative offset recorded in a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTag {
    offset: Offset,
}

impl OffsetTag {
    pub fn new(offset: Offset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Split a leading tag off `file_name`, returning the tag and the rest
    pub fn split(file_name: &str) -> Option<(OffsetTag, &str)> {
        let caps = OFFSET_TAG_REGEX.captures(file_name)?;
        let seconds: f64 = caps[1].parse().ok()?;
        let offset = Offset::from_seconds(seconds).ok()?;
        let tag_len = caps.get(0)?.end();

        Some((OffsetTag::new(offset), &file_name[tag_len..]))
    }

    /// Tag value rounded half away from zero to hundredths of a second
    fn centiseconds(&self) -> i64 {
        let millis = self.offset.millis();
        if millis >= 0 {
            millis.saturating_add(5) / 10
        } else {
            millis.saturating_sub(5) / 10
        }
    }
}

impl fmt::Display for OffsetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.centiseconds();
        let sign = if cents < 0 { '-' } else { '+' };
        let abs = cents.unsigned_abs();
        write!(f, "{{{}{}.{:02}_Sec}}_", sign, abs / 100, abs % 100)
    }
}

/// Derive the output file name for `file_name` shifted by `offset`
pub fn output_file_name(file_name: &str, offset: Offset) -> String {
    match OffsetTag::split(file_name) {
        Some((tag, rest)) => format!("{}{}", OffsetTag::new(tag.offset() + offset), rest),
        None => format!("{}{}", OffsetTag::new(offset), file_name),
    }
}

/// Derive the output path for `input` shifted by `offset`.
///
/// Only the file name is tagged. The result lives next to the input unless
/// `output_dir` is given.
pub fn output_path<P: AsRef<Path>>(input: P, offset: Offset, output_dir: Option<&Path>) -> PathBuf {
    let input = input.as_ref();
    let file_name = input.file_name().unwrap_or_default().to_string_lossy();
    let renamed = output_file_name(&file_name, offset);

    match output_dir {
        Some(dir) => dir.join(renamed),
        None => input.with_file_name(renamed),
    }
}
