//! Error types for the Enricher

use ethiofi_store::StoreError;
use thiserror::Error;

/// Errors that can occur during enrichment
#[derive(Error, Debug)]
pub enum EnricherError {
    /// Loading or writing the dataset failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An extra attribute would overwrite a core column
    #[error("Extra attribute '{field}' collides with a core {record_type} column")]
    ReservedField {
        /// Offending key
        field: String,
        /// Record kind being built
        record_type: &'static str,
    },

    /// Input rejected before a record was created
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing the audit log failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the audit log failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
