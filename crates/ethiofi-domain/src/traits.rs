//! Trait definitions for external interactions
//!
//! Infrastructure implementations live in other crates.

use crate::dataset::Dataset;

/// Anything that can produce the two-sheet dataset
///
/// Implemented by the infrastructure layer (ethiofi-store's `DataLoader`)
/// and by in-memory sources in tests.
pub trait DatasetSource {
    /// Error type for load operations
    type Error;

    /// Load the current dataset
    fn load_dataset(&self) -> Result<Dataset, Self::Error>;
}

impl DatasetSource for Dataset {
    type Error = std::convert::Infallible;

    fn load_dataset(&self) -> Result<Dataset, Self::Error> {
        Ok(self.clone())
    }
}
