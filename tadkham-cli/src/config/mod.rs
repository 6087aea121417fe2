//! Configuration file support
//!
//! Every section and key is optional. Command-line flags take precedence
//! over values read here.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Parse TOML configuration content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file used when `--dictionary` is not given
    pub path: Option<PathBuf>,

    /// Reject dictionaries that are out of order
    pub validate: bool,

    /// Sort the dictionary on load
    pub sort: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            validate: true,
            sort: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Separator between segments in text output
    pub delimiter: String,

    /// Wrap text output at this many characters (0 = off)
    pub wrap: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            delimiter: "|".to_string(),
            wrap: 0,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Total bytes per file above which lines are segmented in parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel_threshold: 100_000,
        }
    }
}
