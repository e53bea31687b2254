use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::converter::{ConversionReport, StreamConverter};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::naming;
use crate::subtitle_format::SubtitleFormat;
use crate::timecode::Offset;

// @module: Application controller for subtitle shifting

/// Outcome of one successful shift
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSummary {
    /// Where the shifted subtitles were written
    pub output_path: PathBuf,
    /// Format detected from the input extension
    pub format: SubtitleFormat,
    /// Offset actually applied, rounded to milliseconds
    pub offset: Offset,
    /// Per-line counters
    pub report: ConversionReport,
}

impl ShiftSummary {
    /// Status text printed on stdout after a successful run
    pub fn status_message(&self) -> String {
        status_message(self.report.deleted, &self.output_path)
    }
}

/// Build the user-facing status text for `deleted` dropped subtitles
pub fn status_message(deleted: usize, output_path: &Path) -> String {
    let mut text = String::from("Success.\n");
    match deleted {
        0 => {}
        1 => text.push_str("One subtitle was deleted at the beginning of the file.\n"),
        n => text.push_str(&format!("{} subtitles were deleted at the beginning of the file.\n", n)),
    }
    text.push_str(&format!("Filename = {}", output_path.display()));
    text
}

/// Main application controller for subtitle shifting
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shift `input_file` by `seconds` and write the result under a tagged name.
    ///
    /// All validation happens before any file is opened.
    pub fn run<P: AsRef<Path>>(&self, input_file: P, seconds: f64) -> Result<ShiftSummary> {
        let input_file = input_file.as_ref();

        if !FileManager::file_exists(input_file) {
            return Err(AppError::InvalidInputPath(input_file.to_path_buf()).into());
        }

        let format = SubtitleFormat::from_path(input_file)
            .ok_or_else(|| AppError::UnsupportedExtension(input_file.to_path_buf()))?;

        let offset = Offset::from_seconds(seconds).map_err(AppError::from)?;

        let output_dir = self.config.output_dir.as_deref();
        let output_path = naming::output_path(input_file, offset, output_dir);
        debug!("Output path for {:?}: {:?}", input_file, output_path);

        if FileManager::same_file(input_file, &output_path) {
            return Err(AppError::OutputIsInput(output_path).into());
        }

        if let Some(dir) = output_dir {
            FileManager::ensure_dir(dir)?;
        }

        info!("Shifting {} subtitles in {:?} by {}", format, input_file, offset);

        let converter = StreamConverter::new(format, offset);
        let report = converter.convert_file(input_file, &output_path)?;

        Ok(ShiftSummary {
            output_path,
            format,
            offset,
            report,
        })
    }
}
