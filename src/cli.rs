use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exprtree::{Sample, write_transcript};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// exprtree - Evaluate and render sample arithmetic expression trees
#[derive(Parser, Debug)]
#[command(name = "exprtree")]
#[command(about = "Print sample expression trees alongside their evaluated value")]
#[command(version)]
pub struct CliArgs {
    /// Samples to print (default: all of them)
    #[arg(value_enum)]
    pub samples: Vec<Sample>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub samples: Vec<Sample>,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let samples = if args.samples.is_empty() {
            Sample::ALL.to_vec()
        } else {
            args.samples
        };

        Self {
            samples,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level);

    info!("Printing {} sample expression(s)", config.samples.len());

    let stdout = io::stdout();
    write_transcript(&mut stdout.lock(), &config.samples)
        .context("Could not write transcript to stdout")?;

    Ok(())
}
