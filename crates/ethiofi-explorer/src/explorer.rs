//! Dataset explorer

use crate::chart;
use crate::error::ExplorerError;
use crate::summary::DatasetSummary;
use crate::trend::TrendSeries;
use ethiofi_domain::traits::DatasetSource;
use ethiofi_domain::Dataset;
use std::path::Path;
use tracing::{info, warn};

/// Summaries and charts over a dataset source
///
/// Every call loads a fresh dataset through the source.
pub struct DataExplorer<S> {
    source: S,
}

impl<S> DataExplorer<S>
where
    S: DatasetSource,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    /// Create an explorer over `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn load(&self) -> Result<Dataset, ExplorerError> {
        self.source
            .load_dataset()
            .map_err(|e| ExplorerError::Source(Box::new(e)))
    }

    /// Summary of the main sheet
    pub fn get_summary(&self) -> Result<DatasetSummary, ExplorerError> {
        let dataset = self.load()?;
        Ok(DatasetSummary::from_table(&dataset.data))
    }

    /// Plot national account ownership over time to an SVG file
    ///
    /// Returns the plotted series together with the matching rows sorted by
    /// date, or `None` (no file written) when no rows match.
    pub fn plot_account_ownership_trend(
        &self,
        output: &Path,
    ) -> Result<Option<TrendSeries>, ExplorerError> {
        let dataset = self.load()?;
        let series = TrendSeries::from_table(&dataset.data)?;

        if series.is_empty() {
            warn!("No account ownership data found");
            return Ok(None);
        }

        chart::render_trend(&series, output)?;
        info!(
            "Plotted {} account ownership points to {}",
            series.len(),
            output.display()
        );
        Ok(Some(series))
    }
}
