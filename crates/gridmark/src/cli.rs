//! Command-line interface for gridmark.

use std::path::PathBuf;

use clap::Parser;

/// Gridmark - tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "gridmark")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a glyph atlas (overrides the settings file)
    #[arg(long)]
    pub atlas: Option<PathBuf>,

    /// Disable the terminal bell after each move
    #[arg(long)]
    pub mute: bool,

    /// Write logs to this file (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
