//! Error types for the Explorer

use thiserror::Error;

/// Errors that can occur while exploring the dataset
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The dataset source failed to load
    #[error("Failed to load dataset: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A matching row has an observation date that cannot be parsed
    #[error("Invalid observation date '{value}' in record {record_id}")]
    InvalidDate {
        /// Row's record id
        record_id: String,
        /// Raw cell text
        value: String,
    },

    /// Chart rendering failed
    #[error("Chart error: {0}")]
    Chart(String),
}
