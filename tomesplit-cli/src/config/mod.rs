//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tomesplit_core::PatternSet;

/// CLI configuration structure
#[derive(Debug, Default)]
pub struct CliConfig {
    /// Segmentation patterns
    pub patterns: PatternSet,

    /// Output configuration
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Top-level layout of the configuration file. The `[patterns]` table is
/// read by [`PatternSet::from_toml_str`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default, rename = "patterns")]
    _patterns: toml::Table,

    #[serde(default)]
    output: OutputConfig,
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|msg| CliError::ConfigError(msg).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::parse(&content).map_err(|msg| {
            CliError::ConfigError(format!("failed to parse {}: {msg}", path.display())).into()
        })
    }

    /// Load the given file, or fall back to the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
        let patterns = PatternSet::from_toml_str(content).map_err(|e| match e {
            tomesplit_core::Error::Config(msg) => msg,
            other => other.to_string(),
        })?;

        Ok(Self {
            patterns,
            output: file.output,
        })
    }
}
