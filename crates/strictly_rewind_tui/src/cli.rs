//! Command-line interface for strictly_rewind_tui.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind_tui")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "strictly_rewind.toml")]
    pub config: PathBuf,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Do not highlight the winning line
    #[arg(long)]
    pub no_highlight: bool,

    /// Log file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
