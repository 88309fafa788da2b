use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Write the JSON envelope to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Sets the level of logging.
    #[arg(long, default_value = "warn")]
    pub log: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the weekly Treasury par-yield history.
    Yields,

    /// Assemble daily close histories for the tracked reference assets.
    Market,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}
