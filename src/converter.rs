/*!
 * Line-by-line conversion of a subtitle stream.
 *
 * The converter copies every line unchanged except time-range lines, which
 * are shifted. When a time-range line is deleted the rest of its block (the
 * subtitle text up to and including the blank separator) is dropped as well.
 *
 * Lines are handled as raw bytes so that subtitle text in legacy encodings
 * is copied byte-for-byte; only valid UTF-8 lines can be time-range lines.
 */

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};

use crate::errors::ConversionError;
use crate::file_utils::FileManager;
use crate::subtitle_format::SubtitleFormat;
use crate::time_range::{split_line_terminator, transform_time_range_line, RenderedLine};
use crate::timecode::Offset;

/// Counters collected during one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Lines read from the input
    pub lines: usize,
    /// Time-range lines rewritten normally
    pub shifted: usize,
    /// Time-range lines whose start was clamped to zero
    pub forced_start: usize,
    /// Subtitle blocks dropped because they ended before the movie start
    pub deleted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConverterState {
    Copying,
    Suppressing,
}

/// Shifts every time-range line of a stream by a fixed offset
#[derive(Debug, Clone, Copy)]
pub struct StreamConverter {
    format: SubtitleFormat,
    offset: Offset,
}

impl StreamConverter {
    pub fn new(format: SubtitleFormat, offset: Offset) -> Self {
        Self { format, offset }
    }

    /// Convert `reader` into `writer` and report what happened.
    ///
    /// Stops at the first time-range line that cannot be parsed.
    pub fn convert<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<ConversionReport, ConversionError> {
        let mut state = ConverterState::Copying;
        let mut report = ConversionReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            report.lines += 1;

            match self.as_time_range_line(&buf) {
                Some(line) => {
                    let canonical = self.format.to_canonical(line);
                    let rendered = transform_time_range_line(&canonical, self.offset).map_err(|source| {
                        ConversionError::MalformedTimeLine {
                            line_number: report.lines,
                            line: split_line_terminator(line).0.to_string(),
                            source,
                        }
                    })?;

                    match rendered {
                        RenderedLine::Deleted => {
                            debug!("Deleted subtitle at line {}: {}", report.lines, line.trim_end());
                            report.deleted += 1;
                            state = ConverterState::Suppressing;
                        }
                        RenderedLine::Shifted(text) => {
                            writer.write_all(self.format.from_canonical(text).as_bytes())?;
                            report.shifted += 1;
                            state = ConverterState::Copying;
                        }
                        RenderedLine::ForcedStart(text) => {
                            debug!("Subtitle at line {} now starts at zero", report.lines);
                            writer.write_all(self.format.from_canonical(text).as_bytes())?;
                            report.forced_start += 1;
                            state = ConverterState::Copying;
                        }
                    }
                }
                None if state == ConverterState::Suppressing => {
                    trace!("Dropping line {} of a deleted subtitle", report.lines);
                    if is_blank(&buf) {
                        state = ConverterState::Copying;
                    }
                }
                None => writer.write_all(&buf)?,
            }
        }

        writer.flush()?;

        if report.lines == 0 {
            warn!("Input subtitle stream is empty");
        }

        Ok(report)
    }

    /// Convert `input` into a new file at `output`.
    ///
    /// The output only appears once the whole input has been converted.
    pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input: P1, output: P2) -> Result<ConversionReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        let file = File::open(input).with_context(|| format!("Failed to open input file: {:?}", input))?;
        let reader = BufReader::new(file);

        let report = FileManager::write_atomically(output, |writer| Ok(self.convert(reader, writer)?))?;

        info!(
            "Converted {} lines of {:?} ({} shifted, {} forced to start at zero, {} deleted)",
            report.lines, input, report.shifted, report.forced_start, report.deleted
        );

        Ok(report)
    }

    fn as_time_range_line<'a>(&self, raw: &'a [u8]) -> Option<&'a str> {
        let line = std::str::from_utf8(raw).ok()?;
        self.format.is_time_range_line(line).then_some(line)
    }
}

// A blank separator ends the suppressed block
fn is_blank(raw: &[u8]) -> bool {
    matches!(raw, b"\n" | b"\r\n")
}
