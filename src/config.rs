//! CLI configuration, loaded from ~/.config/calsync/config.toml.
//!
//! A missing file yields the defaults: a directory store under the local
//! data dir and the primary calendar.

use anyhow::{Context, Result};
use calsync_core::StoreBackend;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Where local events are stored.
    #[serde(default)]
    pub store: StoreConfig,

    /// Remote calendar to sync against.
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreConfig::default(),
            calendar_id: default_calendar_id(),
        }
    }
}

/// Explicit store backend choice; there is no fallback between them.
#[derive(Debug, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// One JSON document per event under `path`.
    Directory {
        #[serde(default = "default_store_dir")]
        path: String,
    },
    /// In-memory stand-in; records do not survive the process.
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Directory {
            path: default_store_dir(),
        }
    }
}

impl StoreConfig {
    pub fn backend(&self) -> StoreBackend {
        match self {
            StoreConfig::Directory { path } => StoreBackend::Directory(expand_path(path)),
            StoreConfig::Memory => StoreBackend::Memory,
        }
    }
}

fn default_store_dir() -> String {
    "~/.local/share/calsync/events".to_string()
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

/// Get the config file path (~/.config/calsync/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Could not determine config directory")?
        .join("calsync")
        .join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_memory_backend() {
        let config: Config = toml::from_str(
            r#"
            calendar_id = "work@example.com"

            [store]
            backend = "memory"
            "#,
        )
        .unwrap();

        assert_eq!(config.calendar_id, "work@example.com");
        assert!(matches!(config.store, StoreConfig::Memory));
    }

    #[test]
    fn defaults_to_directory_backend() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.calendar_id, "primary");
        assert!(matches!(
            config.store.backend(),
            StoreBackend::Directory(_)
        ));
    }
}
