//! Dataset loader
//!
//! Reads the raw unified dataset and persists enriched copies under the
//! processed-data directory.

use crate::config::{DataPaths, SheetNames, DEFAULT_ENRICHED_FILE};
use crate::error::StoreError;
use crate::workbook;
use ethiofi_domain::traits::DatasetSource;
use ethiofi_domain::{Dataset, RecordType, Table};
use std::path::PathBuf;
use tracing::{error, info};

/// Loads and saves the two-sheet dataset
#[derive(Debug, Clone)]
pub struct DataLoader {
    paths: DataPaths,
}

impl DataLoader {
    /// Create a loader over resolved paths
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// The paths this loader reads from and writes to
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Load the raw unified dataset
    ///
    /// Logs the row counts of both sheets and a per-type summary. The
    /// summary is diagnostic only.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the configured file is absent; any other
    /// read failure is logged and returned.
    pub fn load_unified_data(&self) -> Result<Dataset, StoreError> {
        let path = &self.paths.unified_data_file;
        info!("Loading data from: {}", path.display());

        let dataset = workbook::read_dataset(path, SheetNames::SOURCE).map_err(|e| {
            error!("Error loading data: {}", e);
            e
        })?;

        log_summary(&dataset);
        Ok(dataset)
    }

    /// Load a workbook previously written by [`DataLoader::save_enriched_data`]
    pub fn load_enriched_data(&self, filename: &str) -> Result<Dataset, StoreError> {
        let path = self.paths.processed_file(filename);
        info!("Loading enriched data from: {}", path.display());

        let dataset = workbook::read_dataset(&path, SheetNames::ENRICHED).map_err(|e| {
            error!("Error loading enriched data: {}", e);
            e
        })?;

        log_summary(&dataset);
        Ok(dataset)
    }

    /// Write both tables to `data/processed/<filename>`
    ///
    /// `None` uses `enriched_data.xlsx`. Returns the written path.
    pub fn save_enriched_data(
        &self,
        data: &Table,
        impact_links: &Table,
        filename: Option<&str>,
    ) -> Result<PathBuf, StoreError> {
        let path = self
            .paths
            .processed_file(filename.unwrap_or(DEFAULT_ENRICHED_FILE));

        let dataset = Dataset::new(data.clone(), impact_links.clone());
        workbook::write_dataset(&path, &dataset, SheetNames::ENRICHED).map_err(|e| {
            error!("Error saving enriched data: {}", e);
            e
        })?;

        info!("Enriched data saved to: {}", path.display());
        Ok(path)
    }
}

impl DatasetSource for DataLoader {
    type Error = StoreError;

    fn load_dataset(&self) -> Result<Dataset, Self::Error> {
        self.load_unified_data()
    }
}

fn log_summary(dataset: &Dataset) {
    info!("Loaded {} rows in main sheet", dataset.data.len());
    info!("Loaded {} rows in impact links", dataset.impact_links.len());
    info!(
        observations = dataset.count_by_type(RecordType::Observation),
        events = dataset.count_by_type(RecordType::Event),
        targets = dataset.count_by_type(RecordType::Target),
        impact_links = dataset.impact_links.len(),
        "Data summary"
    );
}
