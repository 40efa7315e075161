//! Configuration loading from TOML files
//!
//! File-path configuration lives here, at the pipeline boundary; the core
//! takes only in-memory collections.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for pharmagraph
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub output: OutputConfig,
}

/// Source file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub drugs: PathBuf,
    pub pubmed_csv: PathBuf,
    pub pubmed_json: PathBuf,
    pub clinical_trials: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            drugs: PathBuf::from("data/drugs.csv"),
            pubmed_csv: PathBuf::from("data/pubmed.csv"),
            pubmed_json: PathBuf::from("data/pubmed.json"),
            clinical_trials: PathBuf::from("data/clinical_trials.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the graph JSON artifact is written (and read back by the
    /// reporting subcommands).
    pub graph: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            graph: PathBuf::from("output/drug_mentions_graph.json"),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./pharmagraph.toml (current directory)
    /// 2. ~/.config/pharmagraph/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("pharmagraph.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "pharmagraph") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
