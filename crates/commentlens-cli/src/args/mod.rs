// NOTE: Command Organization Rationale
//
// Why a positional export format (not `--format`)?
// - `--format` is the global output switch (plain / json) shared by every command
// - `export json` writes a file; `--format json` changes what is printed about it
// - Keeping them apart lets `export csv --format json` report the artifact as JSON

mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "commentlens")]
#[command(
    about = "Render comment-analysis results as sections and export the raw data",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Workspace directory (defaults to $COMMENTLENS_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
