//! Trend command implementation.

use crate::cli::TrendArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use ethiofi_explorer::DataExplorer;
use ethiofi_store::DataLoader;
use std::fs;
use std::path::PathBuf;

/// Default chart file name inside the reports directory.
pub const DEFAULT_TREND_FILE: &str = "account_ownership_trend.svg";

/// Execute the trend command.
pub fn execute_trend(args: TrendArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let paths = config.data.paths();
    let output = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| paths.reports_dir.join(DEFAULT_TREND_FILE));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let explorer = DataExplorer::new(DataLoader::new(paths));
    match explorer.plot_account_ownership_trend(&output)? {
        Some(series) => {
            println!("{}", formatter.format_trend(&series)?);
            println!("{}", formatter.success(&format!("Chart written to {}", output.display())));
        }
        None => println!("{}", formatter.warning("No account ownership data found")),
    }

    Ok(())
}
