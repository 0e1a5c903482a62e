//! Paths command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the paths command.
pub fn execute_paths(config: &Config, formatter: &Formatter) -> Result<()> {
    let paths = config.data.paths();
    paths.ensure_dirs()?;
    println!("{}", formatter.format_paths(&paths)?);
    Ok(())
}
