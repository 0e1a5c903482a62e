//! ethiofi Dashboard server
//!
//! Starts the forecast dashboard HTTP server.

use ethiofi_dashboard::{config::DashboardConfig, start_server, DashboardError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), DashboardError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        DashboardConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        DashboardConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("ethiofi Dashboard - Financial Inclusion Forecast");
    println!();
    println!("USAGE:");
    println!("    ethiofi-dashboard [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 8501)");
    println!("    - forecast_path: Forecast CSV (default 'reports/task4_access_forecast.csv')");
    println!();
}
