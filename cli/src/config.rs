//! Application configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use baselingo_utils::LogFormat;
use baselingo_wallet_core::DEFAULT_MIN_DEPOSIT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Configuration for the `baselingo` binary.
///
/// Loaded from a TOML file via [`AppConfig::from_toml_file`]; command-line
/// flags and `BASELINGO_*` environment variables override it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the local store and, by default, the key file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Signing key file. Defaults to `<data_dir>/key.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,

    /// Smallest accepted deposit, in euros.
    #[serde(default = "default_min_deposit")]
    pub min_deposit: f64,

    /// Maximum size of the local store, in MiB.
    #[serde(default = "default_map_size_mb")]
    pub map_size_mb: usize,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./baselingo_data")
}

fn default_min_deposit() -> f64 {
    DEFAULT_MIN_DEPOSIT
}

fn default_map_size_mb() -> usize {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn key_file_path(&self) -> PathBuf {
        self.key_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("key.json"))
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    pub fn map_size_bytes(&self) -> usize {
        self.map_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key_file: None,
            min_deposit: default_min_deposit(),
            map_size_mb: default_map_size_mb(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
