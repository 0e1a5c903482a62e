//! Summary command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use ethiofi_explorer::DataExplorer;
use ethiofi_store::DataLoader;

/// Execute the summary command.
pub fn execute_summary(config: &Config, formatter: &Formatter) -> Result<()> {
    let explorer = DataExplorer::new(DataLoader::new(config.data.paths()));
    let summary = explorer.get_summary()?;
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
