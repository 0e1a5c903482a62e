//! Dataset summary statistics

use chrono::NaiveDate;
use ethiofi_domain::Table;
use serde::Serialize;
use std::collections::BTreeMap;

/// Basic statistics over the main sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Row count
    pub total_records: usize,
    /// Rows per `record_type` (missing values excluded)
    pub record_types: BTreeMap<String, usize>,
    /// Rows per `pillar` (missing values excluded)
    pub pillars: BTreeMap<String, usize>,
    /// Distinct `indicator_code` values
    pub unique_indicators: usize,
    /// Earliest and latest parseable `observation_date`
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl DatasetSummary {
    /// Compute the summary of a main-sheet table
    pub fn from_table(table: &Table) -> Self {
        let dates = table
            .column_values("observation_date")
            .into_iter()
            .filter_map(|cell| cell.as_date());
        let date_range = dates.fold(None, |range: Option<(NaiveDate, NaiveDate)>, date| {
            Some(match range {
                Some((min, max)) => (min.min(date), max.max(date)),
                None => (date, date),
            })
        });

        Self {
            total_records: table.len(),
            record_types: table.value_counts("record_type"),
            pillars: table.value_counts("pillar"),
            unique_indicators: table.distinct_count("indicator_code"),
            date_range,
        }
    }

    /// Plain-text report
    pub fn report(&self) -> String {
        let mut lines = vec![
            "Dataset Summary".to_string(),
            "===============".to_string(),
            format!("Total records: {}", self.total_records),
            format!("Unique indicators: {}", self.unique_indicators),
        ];

        match self.date_range {
            Some((min, max)) => lines.push(format!("Date range: {} to {}", min, max)),
            None => lines.push("Date range: n/a".to_string()),
        }

        lines.push(String::new());
        lines.push("Record types:".to_string());
        for (record_type, count) in &self.record_types {
            lines.push(format!("  {}: {}", record_type, count));
        }

        lines.push(String::new());
        lines.push("Pillars:".to_string());
        for (pillar, count) in &self.pillars {
            lines.push(format!("  {}: {}", pillar, count));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethiofi_domain::{CellValue, Row};

    fn table() -> Table {
        Table::from_rows([
            Row::new()
                .with("record_type", "observation")
                .with("pillar", "access")
                .with("indicator_code", "ACC_OWNERSHIP")
                .with("observation_date", "2014-12-31"),
            Row::new()
                .with("record_type", "observation")
                .with("pillar", "usage")
                .with("indicator_code", "USG_P2P")
                .with("observation_date", "2024-06-30"),
            Row::new()
                .with("record_type", "event")
                .with("pillar", CellValue::Empty)
                .with("indicator_code", "EVT_POLICY_0001")
                .with("observation_date", "not a date"),
        ])
    }

    #[test]
    fn test_summary_counts() {
        let summary = DatasetSummary::from_table(&table());
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.record_types["observation"], 2);
        assert_eq!(summary.record_types["event"], 1);
        assert_eq!(summary.pillars.len(), 2);
        assert_eq!(summary.unique_indicators, 3);
    }

    #[test]
    fn test_date_range_skips_unparseable() {
        let summary = DatasetSummary::from_table(&table());
        assert_eq!(
            summary.date_range,
            Some((
                NaiveDate::from_ymd_opt(2014, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
            ))
        );
    }

    #[test]
    fn test_empty_table() {
        let summary = DatasetSummary::from_table(&Table::default());
        assert_eq!(summary, DatasetSummary::default());
        assert!(summary.report().contains("Date range: n/a"));
    }

    #[test]
    fn test_report_lists_counts() {
        let report = DatasetSummary::from_table(&table()).report();
        assert!(report.contains("Total records: 3"));
        assert!(report.contains("  observation: 2"));
        assert!(report.contains("Date range: 2014-12-31 to 2024-06-30"));
    }
}
