// ABOUTME: Configuration loading for the elapsed logger.
// ABOUTME: Reads ~/.elapsed-logger/config.toml, with every field falling back to a default.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::session::{CatchUp, DEFAULT_NAMESPACE, StorageKeys, TimerOptions};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timer: TimerConfig,
    pub storage: StorageConfig,
}

/// Periodic tick configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub tick_interval_ms: u64,
    pub catch_up: CatchUp,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            catch_up: CatchUp::Drain,
        }
    }
}

/// Where and under which key namespace the session is stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file; defaults to `<data dir>/elapsed-logger/store.json`.
    pub path: Option<PathBuf>,
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl Config {
    /// Load config from ~/.elapsed-logger/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".elapsed-logger")
            .join("config.toml")
    }

    /// Directory for the store and the diagnostic log.
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("elapsed-logger")
    }

    /// Path to the diagnostic log file.
    pub fn log_path() -> PathBuf {
        Self::data_dir().join("elog.log")
    }

    /// Path to the session store, honouring `storage.path`.
    pub fn store_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("store.json"))
    }

    /// Tick period, never shorter than 10 ms.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timer.tick_interval_ms.max(10))
    }

    pub fn timer_options(&self) -> TimerOptions {
        TimerOptions {
            catch_up: self.timer.catch_up,
            keys: StorageKeys::new(self.storage.namespace.clone()),
        }
    }
}
