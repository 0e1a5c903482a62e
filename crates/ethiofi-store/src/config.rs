//! Data path configuration
//!
//! Resolves every dataset location from a single project root and creates
//! the raw/processed directories before any I/O happens.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the raw unified dataset
pub const UNIFIED_DATA_FILE: &str = "ethiopia_fi_unified_data.xlsx";

/// File name of the precomputed access forecast
pub const FORECAST_FILE: &str = "task4_access_forecast.csv";

/// Default file name used by `save_enriched_data`
pub const DEFAULT_ENRICHED_FILE: &str = "enriched_data.xlsx";

/// Sheet names of a two-sheet workbook
///
/// The raw dataset and the files this crate writes use different names.
/// Both pairs are kept as constants instead of being unified, because
/// downstream notebooks read the enriched files by the lowercase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetNames {
    /// Sheet holding observations, events and targets
    pub main: &'static str,
    /// Sheet holding impact links
    pub impact_links: &'static str,
}

impl SheetNames {
    /// Names in the raw dataset (read side)
    pub const SOURCE: SheetNames = SheetNames {
        main: "ethiopia_fi_unified_data",
        impact_links: "Impact_sheet",
    };

    /// Names used for every write
    pub const ENRICHED: SheetNames = SheetNames {
        main: "data",
        impact_links: "impact_links",
    };
}

/// Resolved dataset locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Project root all other paths derive from
    pub project_root: PathBuf,
    /// `data/raw`
    pub data_raw: PathBuf,
    /// `data/processed`
    pub data_processed: PathBuf,
    /// `reports`
    pub reports_dir: PathBuf,
    /// The raw unified dataset workbook
    pub unified_data_file: PathBuf,
    /// The forecast CSV consumed by the dashboard
    pub forecast_file: PathBuf,
}

impl DataPaths {
    /// Compute all paths under `root` without touching the filesystem
    pub fn resolve(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let data_raw = root.join("data").join("raw");
        let data_processed = root.join("data").join("processed");
        let reports_dir = root.join("reports");
        Self {
            unified_data_file: data_raw.join(UNIFIED_DATA_FILE),
            forecast_file: reports_dir.join(FORECAST_FILE),
            project_root: root,
            data_raw,
            data_processed,
            reports_dir,
        }
    }

    /// Create the raw and processed data directories if absent
    pub fn ensure_dirs(&self) -> Result<(), StoreError> {
        for dir in [&self.data_raw, &self.data_processed] {
            fs::create_dir_all(dir)?;
            debug!(dir = %dir.display(), "Data directory ready");
        }
        Ok(())
    }

    /// Resolve paths under `root` and create the data directories
    pub fn init(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let paths = Self::resolve(root);
        paths.ensure_dirs()?;
        Ok(paths)
    }

    /// Path of a file in the processed-data directory
    pub fn processed_file(&self, filename: &str) -> PathBuf {
        self.data_processed.join(filename)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::resolve(".")
    }
}

/// User-facing data settings (TOML `[data]` section)
///
/// Only the root is required; the two input files can be pointed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Project root
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Override for the raw unified dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_data_file: Option<PathBuf>,

    /// Override for the forecast CSV
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_file: Option<PathBuf>,
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            unified_data_file: None,
            forecast_file: None,
        }
    }
}

impl DataConfig {
    /// Resolve to concrete paths (no filesystem access)
    pub fn paths(&self) -> DataPaths {
        let mut paths = DataPaths::resolve(&self.project_root);
        if let Some(file) = &self.unified_data_file {
            paths.unified_data_file = file.clone();
        }
        if let Some(file) = &self.forecast_file {
            paths.forecast_file = file.clone();
        }
        paths
    }
}
