//! Process-lifetime forecast cache

use crate::error::DashboardError;
use crate::forecast::ForecastTable;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Loads the forecast file on first use and keeps it for the process
///
/// Only a successful load is kept; a failed load is retried on the next
/// call. The file is never re-read once cached.
#[derive(Debug)]
pub struct ForecastCache {
    path: PathBuf,
    table: OnceLock<Arc<ForecastTable>>,
}

impl ForecastCache {
    /// Cache for the file at `path`; nothing is read yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
        }
    }

    /// Cache already holding `table`
    pub fn preloaded(path: impl Into<PathBuf>, table: ForecastTable) -> Self {
        let cache = Self::new(path);
        let _ = cache.table.set(Arc::new(table));
        cache
    }

    /// Forecast file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a table has been loaded
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// The cached table, loading it on first use
    pub fn get(&self) -> Result<Arc<ForecastTable>, DashboardError> {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        debug!("Loading forecast from {}", self.path.display());
        let loaded = Arc::new(ForecastTable::load(&self.path)?);
        // A concurrent first load may have won; keep whichever landed first
        Ok(Arc::clone(self.table.get_or_init(|| loaded)))
    }
}
