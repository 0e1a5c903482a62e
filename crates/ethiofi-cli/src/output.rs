//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ethiofi_enricher::PendingCounts;
use ethiofi_explorer::{DatasetSummary, TrendSeries};
use ethiofi_store::DataPaths;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the resolved project paths.
    pub fn format_paths(&self, paths: &DataPaths) -> Result<String> {
        let entries = [
            ("project_root", &paths.project_root),
            ("data_raw", &paths.data_raw),
            ("data_processed", &paths.data_processed),
            ("reports_dir", &paths.reports_dir),
            ("unified_data_file", &paths.unified_data_file),
            ("forecast_file", &paths.forecast_file),
        ];

        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.display().to_string().into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Table => Ok(self.key_value_table(
                ["Path", "Location"],
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.display().to_string())),
            )),
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|(_, v)| v.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format per-type record counts of a loaded dataset.
    pub fn format_counts(&self, counts: &[(&str, usize)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = counts
                    .iter()
                    .map(|(k, v)| (k.to_string(), (*v).into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Table => Ok(self.key_value_table(
                ["Records", "Count"],
                counts.iter().map(|(k, v)| (k.to_string(), v.to_string())),
            )),
            OutputFormat::Quiet => Ok(counts
                .iter()
                .map(|(_, v)| v.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a dataset summary.
    pub fn format_summary(&self, summary: &DatasetSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Quiet => Ok(summary.total_records.to_string()),
            OutputFormat::Table => {
                let date_range = summary
                    .date_range
                    .map(|(min, max)| format!("{} to {}", min, max))
                    .unwrap_or_else(|| "n/a".to_string());

                let mut rows = vec![
                    ("Total records".to_string(), summary.total_records.to_string()),
                    ("Unique indicators".to_string(), summary.unique_indicators.to_string()),
                    ("Date range".to_string(), date_range),
                ];
                rows.extend(
                    summary
                        .record_types
                        .iter()
                        .map(|(k, v)| (format!("record_type: {}", k), v.to_string())),
                );
                rows.extend(
                    summary
                        .pillars
                        .iter()
                        .map(|(k, v)| (format!("pillar: {}", k), v.to_string())),
                );
                Ok(self.key_value_table(["Statistic", "Value"], rows))
            }
        }
    }

    /// Format the plotted trend points.
    pub fn format_trend(&self, series: &TrendSeries) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(series)?),
            OutputFormat::Quiet => Ok(series.len().to_string()),
            OutputFormat::Table => Ok(self.key_value_table(
                ["Date", "Account Ownership (%)"],
                series
                    .points
                    .iter()
                    .map(|p| (p.date.to_string(), format!("{:.1}", p.value))),
            )),
        }
    }

    /// Format the outcome of a merge.
    pub fn format_merge(&self, added: &PendingCounts, main_rows: usize, link_rows: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "added": {
                    "observations": added.observations,
                    "events": added.events,
                    "impact_links": added.impact_links,
                },
                "data_rows": main_rows,
                "impact_link_rows": link_rows,
            }))?),
            OutputFormat::Quiet => Ok(added.total().to_string()),
            OutputFormat::Table => Ok(self.success(&format!(
                "Merged {} observations, {} events, {} impact links ({} data rows, {} impact link rows)",
                added.observations, added.events, added.impact_links, main_rows, link_rows
            ))),
        }
    }

    fn key_value_table<I>(&self, header: [&str; 2], rows: I) -> String
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut builder = Builder::default();
        builder.push_record(header);
        for (key, value) in rows {
            builder.push_record([key, value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Apply color if enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
