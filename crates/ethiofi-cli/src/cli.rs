//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// ethiofi - Ethiopia financial-inclusion data pipeline.
#[derive(Debug, Parser)]
#[command(name = "ethiofi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ETHIOFI_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the data directories and print the resolved paths
    Paths,

    /// Load the unified dataset and print record counts
    Load,

    /// Summarize the unified dataset
    Summary,

    /// Plot the account ownership trend
    Trend(TrendArgs),

    /// Apply a batch of new records and merge them into the dataset
    Enrich(EnrichArgs),

    /// Run the forecast dashboard
    Dashboard(DashboardArgs),
}

/// Arguments for the trend command.
#[derive(Debug, Parser)]
pub struct TrendArgs {
    /// SVG output file (default: <reports>/account_ownership_trend.svg)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// JSON file with an array of additions
    #[arg(short, long)]
    pub file: String,

    /// Write the merged workbook here
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the enrichment audit log here
    #[arg(short, long)]
    pub log: Option<String>,

    /// Number new ids above the highest id already in the dataset
    #[arg(long)]
    pub seed_from_dataset: bool,
}

/// Arguments for the dashboard command.
#[derive(Debug, Parser)]
pub struct DashboardArgs {
    /// Port override
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Forecast CSV override (default: the project's forecast file)
    #[arg(long)]
    pub forecast: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enrich() {
        let cli = Cli::try_parse_from([
            "ethiofi",
            "--format",
            "json",
            "enrich",
            "--file",
            "batch.json",
            "--output",
            "out.xlsx",
            "--seed-from-dataset",
        ])
        .unwrap();

        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Enrich(args) => {
                assert_eq!(args.file, "batch.json");
                assert_eq!(args.output.as_deref(), Some("out.xlsx"));
                assert!(args.log.is_none());
                assert!(args.seed_from_dataset);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ethiofi", "summary", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Summary));
    }

    #[test]
    fn test_enrich_requires_file() {
        assert!(Cli::try_parse_from(["ethiofi", "enrich"]).is_err());
    }
}
