//! ethiofi CLI - Command-line interface for the financial-inclusion pipeline.

use clap::Parser;
use ethiofi_cli::commands;
use ethiofi_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ethiofi_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Explicit config file, else the user config (created on first run)
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load_or_init()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Paths => commands::execute_paths(&config, &formatter)?,
        Command::Load => commands::execute_load(&config, &formatter)?,
        Command::Summary => commands::execute_summary(&config, &formatter)?,
        Command::Trend(args) => commands::execute_trend(args, &config, &formatter)?,
        Command::Enrich(args) => commands::execute_enrich(args, &config, &formatter)?,
        Command::Dashboard(args) => {
            commands::execute_dashboard(args, &config, &formatter).await?
        }
    }

    Ok(())
}
