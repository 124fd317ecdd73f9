//! Configuration management for daylog

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::{DEFAULT_DAY_FORMAT, DEFAULT_TIMESTAMP_FORMAT};

/// Startup configuration
///
/// The gate values only seed the channel registry; toggling a gate at runtime
/// is never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Gate for error, info, debug, verbose, warning and severe lines (and network lines)
    #[serde(default = "default_enabled")]
    pub general_logging: bool,

    /// Gate for memory lines
    #[serde(default = "default_enabled")]
    pub memory_logging: bool,

    /// Gate for network lines, only effective while general logging is on
    #[serde(default = "default_enabled")]
    pub network_logging: bool,

    /// strftime layout of the timestamp at the start of each line
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// strftime layout of the day key in `log_<day>.txt`
    #[serde(default = "default_day_format")]
    pub day_format: String,

    /// Directory for day files (default: the user's documents directory)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_day_format() -> String {
    DEFAULT_DAY_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general_logging: default_enabled(),
            memory_logging: default_enabled(),
            network_logging: default_enabled(),
            timestamp_format: default_timestamp_format(),
            day_format: default_day_format(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the default file, or return default if not found
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid daylog config, using defaults");
            Self::default()
        })
    }

    /// Reject layouts chrono cannot render
    pub fn validate(&self) -> Result<()> {
        check_strftime(&self.timestamp_format).context("Invalid timestamp_format")?;
        check_strftime(&self.day_format).context("Invalid day_format")?;
        if self.day_format.contains(|c: char| c == '/' || c == '\\') {
            anyhow::bail!("day_format must not contain path separators");
        }
        Ok(())
    }

    /// Directory where day files are written
    ///
    /// Uses `log_dir` when set, otherwise the platform documents directory.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        default_log_dir()
    }
}

fn check_strftime(layout: &str) -> Result<()> {
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("'{}' is not a valid strftime layout", layout);
    }
    Ok(())
}

/// Get the default directory for day files
///
/// First the documents directory, then the local data directory, then `.`.
pub fn default_log_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| {
            tracing::warn!("Could not determine a documents directory, logging to current directory");
            PathBuf::from(".")
        })
}

/// Get the path to the config file (`<config dir>/daylog/config.toml`)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("daylog").join("config.toml"))
}

/// Ensure the log directory exists
pub fn ensure_log_dir(config: &Config) -> Result<PathBuf> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir).context("Failed to create log directory")?;
    Ok(dir)
}
