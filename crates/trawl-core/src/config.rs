// Rust guideline compliant 2026-02-06

//! Configuration management for Trawl.

use crate::{glob, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Plain,
    /// JSON output format.
    Json,
    /// Detailed table with type, size and modification time.
    Long,
}

/// Configuration for Trawl behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Worker threads for callback dispatch (0 = automatic).
    #[serde(default)]
    pub threads: usize,

    /// Whether hidden entries are included by default.
    #[serde(default)]
    pub show_hidden: bool,

    /// Whether symlinked directories are entered by default.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Whether `.gitignore` files are honored by default.
    #[serde(default = "default_respect_ignore")]
    pub respect_ignore_files: bool,

    /// Default output format for results.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Glob patterns always excluded from searches.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Ignore files are honored unless explicitly disabled.
fn default_respect_ignore() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: 0,
            show_hidden: false,
            follow_symlinks: false,
            respect_ignore_files: default_respect_ignore(),
            output_format: OutputFormat::default(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `TRAWL_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `config.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TRAWL_THREADS` - Worker thread count (0 = automatic)
    /// - `TRAWL_SHOW_HIDDEN` - Include hidden entries (true/false)
    /// - `TRAWL_FOLLOW_SYMLINKS` - Enter symlinked directories (true/false)
    /// - `TRAWL_RESPECT_IGNORE` - Honor ignore files (true/false)
    /// - `TRAWL_OUTPUT_FORMAT` - Output format (plain/json/long)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TRAWL_THREADS") {
            self.threads = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("TRAWL_THREADS must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TRAWL_SHOW_HIDDEN") {
            self.show_hidden = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("TRAWL_SHOW_HIDDEN must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TRAWL_FOLLOW_SYMLINKS") {
            self.follow_symlinks = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "TRAWL_FOLLOW_SYMLINKS must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("TRAWL_RESPECT_IGNORE") {
            self.respect_ignore_files = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "TRAWL_RESPECT_IGNORE must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("TRAWL_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                "long" => OutputFormat::Long,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "TRAWL_OUTPUT_FORMAT must be plain, json, or long".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern fails to compile.
    fn validate(&self) -> Result<()> {
        for pattern in &self.exclude {
            glob::translate(pattern, false).map_err(|e| {
                crate::Error::InvalidConfig(format!(
                    "exclude pattern {:?} does not compile: {}",
                    pattern, e
                ))
            })?;
        }
        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory that will hold `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
