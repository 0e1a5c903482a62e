//! ethiofi CLI library.
//!
//! Command-line access to the financial-inclusion pipeline: path setup,
//! dataset loading and summaries, the trend chart, batch enrichment and
//! the forecast dashboard.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
