use clap::Parser;

use crate::cli::LogLevel;

/// In-memory virtual filesystem served to a parent process as a
/// request/response bridge on stdin/stdout.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Minimum severity of log lines; logs go to stderr, stdout carries
    /// bridge frames
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
