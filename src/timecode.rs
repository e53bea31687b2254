use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimecodeError;

// @module: Timestamp parsing, shifting and formatting

// @const: Canonical timestamp regex (HH:MM:SS.mmm)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})$").unwrap()
});

/// Decimal separator used by the canonical timestamp form
pub const CANONICAL_SEPARATOR: char = '.';

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;

/// Signed time offset with millisecond precision.
///
/// Fractional seconds are rounded to the nearest millisecond once, when the
/// offset is built, so every timestamp in a file is moved by the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset {
    millis: i64,
}

impl Offset {
    pub const ZERO: Offset = Offset { millis: 0 };

    /// Build an offset from a (possibly negative, possibly fractional) number of seconds
    pub fn from_seconds(seconds: f64) -> Result<Self, TimecodeError> {
        if !seconds.is_finite() {
            return Err(TimecodeError::NonFiniteOffset(seconds));
        }

        // `as` saturates on overflow
        Ok(Self {
            millis: (seconds * MS_PER_SECOND as f64).round() as i64,
        })
    }

    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }

    pub fn as_seconds(&self) -> f64 {
        self.millis as f64 / MS_PER_SECOND as f64
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::from_millis(self.millis.saturating_add(rhs.millis))
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::from_millis(self.millis.saturating_neg())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis < 0 { '-' } else { '+' };
        let abs = self.millis.unsigned_abs();
        write!(f, "{}{}.{:03}s", sign, abs / MS_PER_SECOND, abs % MS_PER_SECOND)
    }
}

/// A point on the subtitle timeline, never before the start of the movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timecode {
    millis: u64,
}

/// Result of moving a timecode by an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shifted {
    /// The timecode is still at or after the start of the movie
    Kept(Timecode),
    /// The timecode moved before the start of the movie
    Deleted,
}

impl Shifted {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Shifted::Deleted)
    }
}

impl Timecode {
    pub const ZERO: Timecode = Timecode { millis: 0 };

    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub fn millis(&self) -> u64 {
        self.millis
    }

    /// Parse a canonical `HH:MM:SS.mmm` timestamp
    pub fn parse(text: &str) -> Result<Self, TimecodeError> {
        let caps = TIMESTAMP_REGEX
            .captures(text)
            .ok_or_else(|| TimecodeError::InvalidFormat(text.to_string()))?;

        // The regex guarantees ASCII digits, so these cannot fail
        let field = |idx: usize| -> Result<u64, TimecodeError> {
            caps[idx]
                .parse::<u64>()
                .map_err(|_| TimecodeError::InvalidFormat(text.to_string()))
        };

        let hours = field(1)?;
        let minutes = field(2)?;
        let seconds = field(3)?;
        let millis = field(4)?;

        if minutes >= 60 || seconds >= 60 {
            return Err(TimecodeError::OutOfRange(text.to_string()));
        }

        Ok(Self {
            millis: hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis,
        })
    }

    /// Move the timecode by `offset`; anything before zero is deleted
    pub fn shift(self, offset: Offset) -> Shifted {
        let total = i128::from(self.millis) + i128::from(offset.millis());
        if total < 0 {
            Shifted::Deleted
        } else {
            Shifted::Kept(Timecode::from_millis(u64::try_from(total).unwrap_or(u64::MAX)))
        }
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.millis / MS_PER_HOUR;
        let minutes = (self.millis % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (self.millis % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = self.millis % MS_PER_SECOND;

        write!(
            f,
            "{:02}:{:02}:{:02}{}{:03}",
            hours, minutes, seconds, CANONICAL_SEPARATOR, millis
        )
    }
}
