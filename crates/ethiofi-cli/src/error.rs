//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset load or save error
    #[error(transparent)]
    Store(#[from] ethiofi_store::StoreError),

    /// Enrichment error
    #[error(transparent)]
    Enricher(#[from] ethiofi_enricher::EnricherError),

    /// Exploration error
    #[error(transparent)]
    Explorer(#[from] ethiofi_explorer::ExplorerError),

    /// Dashboard error
    #[error(transparent)]
    Dashboard(#[from] ethiofi_dashboard::DashboardError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
