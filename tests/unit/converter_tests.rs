/*!
 * Tests for stream conversion of whole subtitle files
 */

use submod::converter::{ConversionReport, StreamConverter};
use submod::errors::ConversionError;
use submod::subtitle_format::SubtitleFormat;
use submod::timecode::Offset;
use crate::common::{SAMPLE_SRT, SAMPLE_VTT};

fn run(format: SubtitleFormat, seconds: f64, input: &str) -> (String, ConversionReport) {
    let converter = StreamConverter::new(format, Offset::from_seconds(seconds).unwrap());
    let mut output = Vec::new();
    let report = converter.convert(input.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), report)
}

/// Scenario: single vtt time line shifted forward
#[test]
fn test_convert_vttLineForward_shouldShiftBothTimestamps() {
    let (output, _) = run(SubtitleFormat::Vtt, 5.0, "00:00:00.243 --> 00:00:02.110\n");
    assert_eq!(output, "00:00:05.243 --> 00:00:07.110\n");
}

/// Scenario: srt output keeps the comma separator
#[test]
fn test_convert_srtLine_shouldPreserveComma() {
    let (output, _) = run(SubtitleFormat::Srt, 1.0, "00:00:00,243 --> 00:00:02,110\n");
    assert_eq!(output, "00:00:01,243 --> 00:00:03,110\n");
}

/// Whole vtt file shifted forward, header untouched
#[test]
fn test_convert_sampleVttForward_shouldCarryAcrossMinutes() {
    let (output, report) = run(SubtitleFormat::Vtt, 5.0, SAMPLE_VTT);

    let expected = "WEBVTT

1
00:00:05.243 --> 00:00:07.110
Previously on ...

2
00:00:08.802 --> 00:00:10.314
Etc.

3
00:00:13.000 --> 00:00:20.500
First line
Second line

4
00:02:04.900 --> 00:02:06.000
Last one.
";
    assert_eq!(output, expected);
    assert_eq!(report.shifted, 4);
    assert_eq!(report.deleted, 0);
    assert_eq!(report.forced_start, 0);
}

/// Whole srt file shifted backward: deletions, forced start and survivors
#[test]
fn test_convert_sampleSrtBackward_shouldDeleteAndClamp() {
    let (output, report) = run(SubtitleFormat::Srt, -10.0, SAMPLE_SRT);

    let expected = "1
2
3
00:00:00,000 --> 00:00:05,500
First line
Second line

4
00:01:49,900 --> 00:01:51,000
Last one.
";
    assert_eq!(output, expected);
    assert_eq!(report.deleted, 2);
    assert_eq!(report.forced_start, 1);
    assert_eq!(report.shifted, 1);
}

/// A deleted block with two text lines counts once
#[test]
fn test_convert_deletedMultiLineBlock_shouldCountOnce() {
    let input = "7\n00:00:01.000 --> 00:00:02.000\nOne\nTwo\n\n8\n00:00:09.000 --> 00:00:10.000\nThree\n";
    let (output, report) = run(SubtitleFormat::Vtt, -5.0, input);

    assert_eq!(output, "7\n8\n00:00:04.000 --> 00:00:05.000\nThree\n");
    assert_eq!(report.deleted, 1);
}

/// A deleted block at the end of the file without a trailing blank line
#[test]
fn test_convert_deletedBlockAtEof_shouldDropTrailingText() {
    let input = "1\n00:00:01.000 --> 00:00:02.000\nGone";
    let (output, report) = run(SubtitleFormat::Vtt, -5.0, input);

    assert_eq!(output, "1\n");
    assert_eq!(report.deleted, 1);
}

/// Lines of the other format are passed through untouched
#[test]
fn test_convert_foreignSeparator_shouldCopyLineUnchanged() {
    let (output, report) = run(SubtitleFormat::Srt, 1.0, "00:00:00.243 --> 00:00:02.110\n");
    assert_eq!(output, "00:00:00.243 --> 00:00:02.110\n");
    assert_eq!(report.shifted, 0);
}

/// A time-looking line that cannot be parsed is a fatal error
#[test]
fn test_convert_malformedLine_shouldFailWithLineNumber() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\nok\n\n2\n00:00:03,000 => 00:00:04,000\nbad\n";
    let converter = StreamConverter::new(SubtitleFormat::Srt, Offset::ZERO);
    let err = converter.convert(input.as_bytes(), Vec::new()).unwrap_err();

    assert!(matches!(err, ConversionError::MalformedTimeLine { line_number: 6, .. }));
    assert!(err.to_string().contains("line 6"));
}
