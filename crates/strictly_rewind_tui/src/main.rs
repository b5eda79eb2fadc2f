//! Strictly Rewind terminal client.

use anyhow::Result;
use clap::Parser;
use strictly_rewind_tui::{Cli, TuiConfig};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::from_cli(&cli)?;

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    strictly_rewind_tui::run(&config)
}
