//! Dashboard command implementation.

use crate::cli::DashboardArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use ethiofi_dashboard::config::DashboardConfig;
use std::path::PathBuf;

/// Dashboard settings for this run.
///
/// The forecast comes from `--forecast`, else from the project layout.
pub fn dashboard_config(args: &DashboardArgs, config: &Config) -> DashboardConfig {
    let mut dashboard = config.dashboard.clone();
    dashboard.forecast_path = args
        .forecast
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data.paths().forecast_file);
    if let Some(port) = args.port {
        dashboard.bind_port = port;
    }
    dashboard
}

/// Execute the dashboard command.
pub async fn execute_dashboard(
    args: DashboardArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let dashboard = dashboard_config(&args, config);
    println!(
        "{}",
        formatter.info(&format!("Dashboard at http://{}", dashboard.bind_addr()))
    );
    ethiofi_dashboard::start_server(dashboard).await?;
    Ok(())
}
