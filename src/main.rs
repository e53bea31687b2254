// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use submod::app_config::{Config, LogLevel};
use submod::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shift the subtitles of a file (default command)
    Shift(ShiftArgs),

    /// Generate shell completions for submod
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by the default invocation and the `shift` subcommand
#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "submod.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Directory for the shifted file (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ShiftArgs {
    /// The .srt or .vtt file to modify
    #[arg(value_name = "INPUTFILE")]
    input_file: PathBuf,

    /// The number of seconds to increment by (or decrement when negative)
    #[arg(value_name = "SECONDS", allow_negative_numbers = true)]
    seconds: f64,

    #[command(flatten)]
    common: CommonArgs,
}

/// submod - shift the timing of movie subtitles
///
/// Creates a new subtitle file in which every timestamp is moved by a fixed
/// number of seconds. The new file is named after the old one with a
/// '{+x.xx_Sec}_' prefix; shifting a file that already has the prefix
/// updates it instead of adding another.
#[derive(Parser, Debug)]
#[command(name = "submod")]
#[command(version)]
#[command(about = "Command line tool to modify the timing of movie subtitles.")]
#[command(long_about = "Creates a new subtitle file from INPUTFILE with all the time fields incremented by SECONDS (decremented when negative).

EXAMPLES:
    submod movie.srt 2.5                  # Writes {+2.50_Sec}_movie.srt
    submod {+2.50_Sec}_movie.srt -0.5     # Writes {+2.00_Sec}_movie.srt
    submod -o shifted/ movie.vtt -10      # Writes shifted/{-10.00_Sec}_movie.vtt
    submod completions bash > submod.bash # Generate bash completions

Subtitles that end up entirely before the start of the movie are deleted;
subtitles that start before it but end after it are clamped to start at zero.

CONFIGURATION:
    Settings are read from submod.json when it exists. You can specify a
    different file with --config-path. Command line options take precedence.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The .srt or .vtt file to modify
    #[arg(value_name = "INPUTFILE")]
    input_file: Option<PathBuf>,

    /// The number of seconds to increment by (or decrement when negative)
    #[arg(value_name = "SECONDS", allow_negative_numbers = true)]
    seconds: Option<f64>,

    #[command(flatten)]
    common: CommonArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            // stdout is reserved for the status report
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    // The max level is narrowed once the config is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Warn);

    let cli = CommandLineOptions::parse_from(expand_negative_fractions(std::env::args_os()));

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "submod", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Shift(args)) => run_shift(args),
        None => default_shift_args(cli.input_file, cli.seconds, cli.common).and_then(run_shift),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

// clap only recognizes `-<digit>` as a negative number, so `-.5` is spelled `-0.5`
fn expand_negative_fractions<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str().and_then(|s| s.strip_prefix("-.")) {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                OsString::from(format!("-0.{}", digits))
            }
            _ => arg,
        })
        .collect()
}

// Default behavior - use top-level args when no subcommand is given
fn default_shift_args(input_file: Option<PathBuf>, seconds: Option<f64>, common: CommonArgs) -> Result<ShiftArgs> {
    let input_file = input_file.ok_or_else(|| anyhow!("INPUTFILE is required when no subcommand is specified"))?;
    let seconds = seconds.ok_or_else(|| anyhow!("SECONDS is required when no subcommand is specified"))?;

    Ok(ShiftArgs {
        input_file,
        seconds,
        common,
    })
}

fn run_shift(args: ShiftArgs) -> Result<()> {
    // A level given on the command line applies before the config is read
    if let Some(cli_level) = &args.common.log_level {
        let level: LogLevel = cli_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load(&args.common.config_path)?;

    // Override config with CLI options if provided
    if let Some(cli_level) = args.common.log_level {
        config.log_level = cli_level.into();
    }
    if let Some(output_dir) = args.common.output_dir {
        config.output_dir = Some(output_dir);
    }

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config)?;
    let summary = controller.run(&args.input_file, args.seconds)?;

    println!("{}", summary.status_message());

    Ok(())
}
