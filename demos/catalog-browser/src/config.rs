//! Browser configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration file for the catalog browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Path to the catalog JSON file.
    #[serde(default)]
    pub catalog: Option<String>,

    /// Default page size for listings.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Default sort key name for listings.
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_per_page() -> u32 {
    12
}

fn default_sort() -> String {
    "bestselling".to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            per_page: default_per_page(),
            sort: default_sort(),
        }
    }
}

impl BrowserConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}
