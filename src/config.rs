//! Configuration management for datekit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_FILE_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_LOG_LEVEL,
};
use crate::utils::timespan::{self, NegativeTimespan};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub timespan: TimespanConfig,
    pub logging: LoggingConfig,
}

/// Timespan formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimespanConfig {
    /// How to format a span whose end precedes its start
    /// Options: "signed", "clamp"
    pub negative: NegativeTimespan,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug", "trace" or "off"
    pub level: String,
    /// Log file; stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level` into a filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    ///
    /// Looks for `./datekit.toml`, then `<config_dir>/datekit/config.toml`.
    pub fn load() -> Result<Self> {
        Self::load_from_dirs(Path::new("."), dirs::config_dir().as_deref())
    }

    /// Same as [`Config::load`], searching `current_dir` and `config_dir`
    /// instead of the process's working directory and the platform config directory.
    pub fn load_from_dirs(current_dir: &Path, config_dir: Option<&Path>) -> Result<Self> {
        let config_path = Self::find_config_file(current_dir, config_dir);

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            log::debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file(current_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = current_dir.join(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = config_dir {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_DIR_FILE_NAME);
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.logging.level_filter()?;

        if let Some(file) = &self.logging.file {
            if file.as_os_str().is_empty() {
                anyhow::bail!("logging.file cannot be empty");
            }
        }

        Ok(())
    }

    /// Format the time between `start` and `end` with the configured negative-span policy
    pub fn format_timespan<Tz1: TimeZone, Tz2: TimeZone>(&self, start: &DateTime<Tz1>, end: &DateTime<Tz2>) -> String {
        timespan::format_timespan_with(start, end, self.timespan.negative)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# datekit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_DIR_FILE_NAME))
    }
}
