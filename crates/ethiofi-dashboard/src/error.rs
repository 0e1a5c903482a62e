//! Error types for the Dashboard

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Dashboard error
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// The forecast file could not be read
    #[error("Failed to read forecast {path}: {source}")]
    ForecastRead {
        /// Configured forecast path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The forecast CSV is malformed
    #[error("Invalid forecast CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The forecast has no rows
    #[error("Forecast table is empty")]
    EmptyForecast,

    /// Target outside the accepted percent range
    #[error("Target rate {0} is outside 50..=70")]
    InvalidTarget(i64),

    /// Chart rendering failed
    #[error("Chart error: {0}")]
    Chart(String),
}
