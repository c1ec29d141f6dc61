// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use assmerge::app_config::{self, Config};
use assmerge::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge two ASS subtitle files (default command)
    Merge(MergeArgs),

    /// Generate shell completions for assmerge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Base subtitle file; its header and styles win ties
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Subtitle file whose styles and events are appended
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output file [default: merged.ass]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// assmerge - merge two ASS subtitle files
///
/// Keeps the first file's script info and styles, appends the second file's
/// styles and events, and renames colliding styles.
#[derive(Parser, Debug)]
#[command(name = "assmerge")]
#[command(version)]
#[command(about = "Merge two ASS subtitle files")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "assmerge merges two ASS subtitle files into one.

The first file's [Script Info], style header and events header are kept.
The second file's styles and events are appended. A second-file style whose
name already exists in the first file is renamed to <name>_2 (or _3, ...),
and the second file's events are updated to use the new name.

EXAMPLES:
    assmerge en.ass signs.ass                   # Write merged.ass
    assmerge en.ass signs.ass -o movie.ass      # Choose the output file
    assmerge -l debug en.ass signs.ass          # Show merge statistics
    assmerge completions bash > assmerge.bash   # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base subtitle file; its header and styles win ties
    #[arg(value_name = "FILE1")]
    file1: Option<PathBuf>,

    /// Subtitle file whose styles and events are appended
    #[arg(value_name = "FILE2")]
    file2: Option<PathBuf>,

    /// Output file [default: merged.ass]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "error:"),
            Level::Warn => ("\x1B[1;33m", "warning:"),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "debug:"),
            Level::Trace => ("\x1B[1;35m", "trace:"),
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
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // The logger accepts everything; log::set_max_level narrows it once the config is known
    if CustomLogger::init(LevelFilter::Trace).is_err() {
        eprintln!("Failed to initialise logger");
        return ExitCode::FAILURE;
    }
    log::set_max_level(LevelFilter::Info);

    match run(CommandLineOptions::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "assmerge", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Merge(args)) => run_merge(args),
        None => {
            let (file1, file2) = match (cli.file1, cli.file2) {
                (Some(file1), Some(file2)) => (file1, file2),
                _ => return Err(anyhow!("FILE1 and FILE2 are required when no subcommand is specified")),
            };

            run_merge(MergeArgs {
                file1,
                file2,
                output: cli.output,
                config: cli.config,
                log_level: cli.log_level,
            })
        }
    }
}

fn run_merge(options: MergeArgs) -> Result<()> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(output) = options.output {
        config.output = output;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.into());

    config.validate().context("Configuration validation failed")?;
    debug!("Merging {:?} and {:?} into {:?}", options.file1, options.file2, config.output);

    let controller = Controller::with_config(config);
    controller.run(&options.file1, &options.file2)?;

    Ok(())
}
