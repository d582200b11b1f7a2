//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["consumesafe.toml", ".consumesafe.toml", "consumesafe.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog storage.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Terminal output.
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Where the catalog lives and how an empty one is filled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog snapshot file, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Load the built-in demo catalog when the file is missing or empty.
    #[serde(default = "default_true")]
    pub seed_demo: bool,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            seed_demo: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Colored terminal output.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Generate a default consumesafe.toml file.
pub fn generate_default_config() -> String {
    r#"# ConsumeSafe configuration

[catalog]
# Snapshot file holding products and alternatives (.json or .toml).
path = "catalog.json"
# Start from the built-in demo catalog when the file is missing or holds no products.
seed_demo = true

[output]
color = true
"#
    .to_string()
}
