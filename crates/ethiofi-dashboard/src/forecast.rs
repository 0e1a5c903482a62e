//! Forecast table and scenarios

use crate::error::DashboardError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::info;

/// One year of the access forecast
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ForecastRow {
    /// Forecast year
    pub year: i32,
    /// Base scenario (percent)
    pub base: f64,
    /// Optimistic scenario (percent)
    pub optimistic: f64,
    /// Pessimistic scenario (percent)
    pub pessimistic: f64,
}

/// Parsed forecast plus the original CSV text for export
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    /// Rows in file order
    pub rows: Vec<ForecastRow>,
    /// File contents as read
    pub raw: String,
}

impl ForecastTable {
    /// Parse forecast CSV text (header `year,base,optimistic,pessimistic`)
    ///
    /// Extra columns are ignored.
    pub fn from_csv_str(raw: impl Into<String>) -> Result<Self, DashboardError> {
        let raw = raw.into();
        let mut reader = csv::Reader::from_reader(raw.as_bytes());
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<ForecastRow>, csv::Error>>()?;
        Ok(Self { rows, raw })
    }

    /// Read and parse a forecast file
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::ForecastRead {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_csv_str(raw)?;
        info!("Loaded {} forecast rows from {}", table.rows.len(), path.display());
        Ok(table)
    }

    /// Greatest year in the table
    pub fn latest_year(&self) -> Option<i32> {
        self.rows.iter().map(|r| r.year).max()
    }
}

/// Forecast scenario
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Base case
    #[default]
    Base,
    /// Optimistic case
    Optimistic,
    /// Pessimistic case
    Pessimistic,
}

impl Scenario {
    /// All scenarios in selector order
    pub const ALL: [Scenario; 3] = [Scenario::Base, Scenario::Optimistic, Scenario::Pessimistic];

    /// Query-string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Base => "base",
            Scenario::Optimistic => "optimistic",
            Scenario::Pessimistic => "pessimistic",
        }
    }

    /// Capitalised display label
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Base => "Base",
            Scenario::Optimistic => "Optimistic",
            Scenario::Pessimistic => "Pessimistic",
        }
    }

    /// This scenario's value in `row`
    pub fn value(&self, row: &ForecastRow) -> f64 {
        match self {
            Scenario::Base => row.base,
            Scenario::Optimistic => row.optimistic,
            Scenario::Pessimistic => row.pessimistic,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "year,base,optimistic,pessimistic\n2025,49.0,52.0,46.0\n2026,52.5,57.0,48.0\n2027,56.0,62.0,50.0\n";

    #[test]
    fn test_parse_forecast() {
        let table = ForecastTable::from_csv_str(CSV).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].optimistic, 57.0);
        assert_eq!(table.latest_year(), Some(2027));
        assert_eq!(table.raw, CSV);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let table =
            ForecastTable::from_csv_str("year,base,optimistic,pessimistic,notes\n2025,1,2,0,x\n")
                .unwrap();
        assert_eq!(table.rows[0].base, 1.0);
    }

    #[test]
    fn test_missing_column_is_error() {
        let err = ForecastTable::from_csv_str("year,base\n2025,1\n").unwrap_err();
        assert!(matches!(err, DashboardError::Csv(_)));
    }

    #[test]
    fn test_header_only_is_empty() {
        let table = ForecastTable::from_csv_str("year,base,optimistic,pessimistic\n").unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.latest_year(), None);
    }

    #[test]
    fn test_scenario_values() {
        let row = ForecastRow {
            year: 2027,
            base: 56.0,
            optimistic: 62.0,
            pessimistic: 50.0,
        };
        let values: Vec<f64> = Scenario::ALL.iter().map(|s| s.value(&row)).collect();
        assert_eq!(values, vec![56.0, 62.0, 50.0]);
        assert_eq!(Scenario::default().label(), "Base");
    }
}
