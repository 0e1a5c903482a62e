//! Account ownership trend extraction

use crate::error::ExplorerError;
use chrono::{Datelike, NaiveDate};
use ethiofi_domain::{CellValue, Table};
use serde::Serialize;
use tracing::warn;

/// Indicator code plotted by the trend chart
pub const ACCOUNT_OWNERSHIP_CODE: &str = "ACC_OWNERSHIP";

/// One point of the trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Source row id
    pub record_id: String,
    /// Observation date
    pub date: NaiveDate,
    /// Account ownership in percent
    pub value: f64,
}

impl TrendPoint {
    /// Date as a fractional year, for plotting
    pub fn fractional_year(&self) -> f64 {
        let days = if self.date.leap_year() { 366.0 } else { 365.0 };
        self.date.year() as f64 + self.date.ordinal0() as f64 / days
    }
}

/// National account ownership observations sorted by date
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendSeries {
    /// Points in ascending date order
    pub points: Vec<TrendPoint>,

    /// Matching rows with every source column, in the same date order.
    /// Rows skipped for a missing value are still present here.
    #[serde(skip)]
    pub table: Table,
}

impl TrendSeries {
    /// Select `observation` rows for `ACC_OWNERSHIP` with `gender == all`
    ///
    /// A table without a `gender` column matches nothing. Rows without a
    /// numeric value are skipped with a warning.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::InvalidDate`] when a matching row's observation date
    /// cannot be parsed.
    pub fn from_table(table: &Table) -> Result<Self, ExplorerError> {
        let matching = table.filter(|t, i| {
            text_is(t.cell(i, "record_type"), "observation")
                && text_is(t.cell(i, "indicator_code"), ACCOUNT_OWNERSHIP_CODE)
                && text_is(t.cell(i, "gender"), "all")
        });

        let mut dated = Vec::with_capacity(matching.len());
        for i in 0..matching.len() {
            let date_cell = matching.cell(i, "observation_date").cloned().unwrap_or_default();
            let date = date_cell.as_date().ok_or_else(|| ExplorerError::InvalidDate {
                record_id: record_id(&matching, i),
                value: date_cell.to_string(),
            })?;
            dated.push((date, i));
        }
        dated.sort_by_key(|(date, _)| *date);

        let mut points = Vec::with_capacity(dated.len());
        for &(date, i) in &dated {
            let record_id = record_id(&matching, i);
            let Some(value) = matching.cell(i, "value_numeric").and_then(CellValue::as_f64) else {
                warn!("Skipping {} without a numeric value", record_id);
                continue;
            };
            points.push(TrendPoint {
                record_id,
                date,
                value,
            });
        }

        let rows = dated
            .iter()
            .map(|&(_, i)| matching.rows()[i].clone())
            .collect();
        let table = Table::from_cells(matching.columns().to_vec(), rows);

        Ok(Self { points, table })
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point
    pub fn latest(&self) -> Option<&TrendPoint> {
        self.points.last()
    }
}

fn record_id(table: &Table, row: usize) -> String {
    table
        .cell(row, "record_id")
        .map(|c| c.to_string())
        .unwrap_or_default()
}

fn text_is(cell: Option<&CellValue>, expected: &str) -> bool {
    cell.and_then(CellValue::as_text) == Some(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethiofi_domain::Row;

    fn row(id: &str, gender: &str, date: &str, value: f64) -> Row {
        Row::new()
            .with("record_id", id)
            .with("record_type", "observation")
            .with("indicator_code", ACCOUNT_OWNERSHIP_CODE)
            .with("gender", gender)
            .with("observation_date", date)
            .with("value_numeric", value)
    }

    #[test]
    fn test_filters_and_sorts() {
        let table = Table::from_rows([
            row("REC_0003", "all", "2021-12-31", 46.0),
            row("REC_0001", "all", "2011-12-31", 14.0),
            row("REC_0002", "female", "2014-12-31", 18.0),
            row("REC_0004", "all", "2014-12-31", 22.0),
        ]);

        let series = TrendSeries::from_table(&table).unwrap();
        let ids: Vec<&str> = series.points.iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, vec!["REC_0001", "REC_0004", "REC_0003"]);
        assert_eq!(series.latest().map(|p| p.value), Some(46.0));
    }

    #[test]
    fn test_missing_gender_column_matches_nothing() {
        let table = Table::from_rows([Row::new()
            .with("record_type", "observation")
            .with("indicator_code", ACCOUNT_OWNERSHIP_CODE)
            .with("observation_date", "2021-12-31")
            .with("value_numeric", 46.0)]);
        assert!(TrendSeries::from_table(&table).unwrap().is_empty());
    }

    #[test]
    fn test_sorted_table_keeps_source_columns() {
        let table = Table::from_rows([
            row("REC_0003", "all", "2021-12-31", 46.0).with("source_name", "Global Findex 2021"),
            row("REC_0002", "female", "2014-12-31", 18.0),
            Row::new()
                .with("record_id", "REC_0005")
                .with("record_type", "observation")
                .with("indicator_code", ACCOUNT_OWNERSHIP_CODE)
                .with("gender", "all")
                .with("observation_date", "2017-12-31")
                .with("notes", "value pending"),
            row("REC_0001", "all", "2011-12-31", 14.0).with("source_name", "Global Findex 2011"),
        ]);

        let series = TrendSeries::from_table(&table).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.table.len(), 3);
        assert_eq!(series.table.columns(), table.columns());
        let ids: Vec<String> = series
            .table
            .column_values("record_id")
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(ids, vec!["REC_0001", "REC_0005", "REC_0003"]);
        assert_eq!(
            series.table.cell(0, "source_name").and_then(CellValue::as_text),
            Some("Global Findex 2011")
        );
        assert_eq!(
            series.table.cell(1, "notes").and_then(CellValue::as_text),
            Some("value pending")
        );
    }

    #[test]
    fn test_bad_date_is_error() {
        let table = Table::from_rows([row("REC_0009", "all", "sometime", 1.0)]);
        let err = TrendSeries::from_table(&table).unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidDate { ref record_id, .. } if record_id == "REC_0009"));
    }

    #[test]
    fn test_fractional_year() {
        let point = TrendPoint {
            record_id: String::new(),
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            value: 0.0,
        };
        assert_eq!(point.fractional_year(), 2021.0);
    }
}
