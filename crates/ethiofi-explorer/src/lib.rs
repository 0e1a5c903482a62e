//! ethiofi Explorer
//!
//! Read-only views over the unified dataset: a summary of record types,
//! pillars, indicators and dates, and the account ownership trend chart.

#![warn(missing_docs)]

pub mod chart;
pub mod error;
pub mod explorer;
pub mod summary;
pub mod trend;

pub use error::ExplorerError;
pub use explorer::DataExplorer;
pub use summary::DatasetSummary;
pub use trend::{TrendPoint, TrendSeries};
