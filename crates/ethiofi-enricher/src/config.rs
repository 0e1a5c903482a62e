//! Configuration for the Enricher

use serde::{Deserialize, Serialize};

/// Configuration for an enrichment session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnricherConfig {
    /// Counter seed: the first generated id number is `id_seed + 1`.
    /// When seeding from a dataset this is the floor.
    #[serde(default = "default_id_seed")]
    pub id_seed: u64,

    /// Collector recorded when an input leaves `collected_by` unset
    #[serde(default = "default_collector")]
    pub default_collector: String,
}

fn default_id_seed() -> u64 {
    1000
}

fn default_collector() -> String {
    "Your Name".to_string()
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            id_seed: default_id_seed(),
            default_collector: default_collector(),
        }
    }
}

impl EnricherConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_collector.trim().is_empty() {
            return Err("default_collector must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
