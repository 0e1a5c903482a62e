//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use ethiofi_dashboard::config::DashboardConfig;
use ethiofi_enricher::EnricherConfig;
use ethiofi_store::config::DataConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project layout
    #[serde(default)]
    pub data: DataConfig,

    /// Enrichment session defaults
    #[serde(default)]
    pub enricher: EnricherConfig,

    /// Dashboard server
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ethiofi").join("config.toml"))
    }

    /// Load the user configuration, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(&Self::path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is absent.
    ///
    /// An existing file that fails to parse or validate is an error and is
    /// left untouched.
    pub fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
        }
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check section values.
    pub fn validate(&self) -> Result<()> {
        self.enricher
            .validate()
            .map_err(|e| CliError::Config(format!("[enricher] {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.enricher.id_seed, 1000);
        assert_eq!(config.dashboard.bind_port, 8501);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [data]
            project_root = "/srv/fi"

            [settings]
            format = "json"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data.project_root, PathBuf::from("/srv/fi"));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.enricher.default_collector, "Your Name");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.enricher.id_seed = 5000;
        config.dashboard.bind_port = 9000;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_enricher_section() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[enricher]\ndefault_collector = \"\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_or_init_writes_defaults_when_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".ethiofi").join("config.toml");

        let config = Config::load_or_init_at(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_init_keeps_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let contents = r#"
            [data]
            project_root = "/srv/fi"

            [enricher]
            default_collector = ""

            [settings]
            format = "json"
            "#;
        fs::write(&path, contents).unwrap();

        assert!(matches!(
            Config::load_or_init_at(&path),
            Err(CliError::Config(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_load_or_init_rejects_malformed_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[data\nproject_root =").unwrap();

        assert!(matches!(
            Config::load_or_init_at(&path),
            Err(CliError::Toml(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[data\nproject_root =");
    }
}
