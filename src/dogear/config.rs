//! # Configuration
//!
//! Dogear reads an optional `config.json` from its config directory:
//! `$DOGEAR_CONFIG_DIR` if set, otherwise the OS config dir for
//! `com.dogear.dogear` (via the `directories` crate).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `store-file` | `~/.dogear_store` | The bookmark file |
//! | `recent-limit` | `10` | How many bookmarks `dogear recent` shows |
//!
//! The store file is resolved in priority order: `--store`, `$DOGEAR_STORE`,
//! the `store-file` key, then the default in the home directory.

use crate::commands::recent::DEFAULT_RECENT_LIMIT;
use crate::error::{DogearError, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORE_FILENAME: &str = ".dogear_store";
pub const STORE_ENV: &str = "DOGEAR_STORE";
pub const CONFIG_DIR_ENV: &str = "DOGEAR_CONFIG_DIR";

pub const KEYS: &[&str] = &["store-file", "recent-limit"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DogearConfig {
    /// Bookmark file; `None` means `~/.dogear_store`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,

    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for DogearConfig {
    fn default() -> Self {
        Self {
            store_file: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl DogearConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DogearError::Io)?;
        let config: DogearConfig =
            serde_json::from_str(&content).map_err(DogearError::Serialization)?;
        if config.recent_limit == 0 {
            return Err(DogearError::Config(format!(
                "recent-limit must be at least 1 in {}",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DogearError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DogearError::Serialization)?;
        fs::write(config_path, content).map_err(DogearError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "store-file" => Some(
                self.store_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            "recent-limit" => Some(self.recent_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "store-file" => {
                if value.trim().is_empty() {
                    return Err("store-file cannot be empty".to_string());
                }
                self.store_file = Some(PathBuf::from(value));
                Ok(())
            }
            "recent-limit" => match value.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.recent_limit = n;
                    Ok(())
                }
                _ => Err(format!(
                    "recent-limit must be a positive number, got '{}'",
                    value
                )),
            },
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }

    /// Resolves the bookmark file: explicit override, then `$DOGEAR_STORE`,
    /// then this config, then `~/.dogear_store`.
    pub fn resolve_store_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env::var_os(STORE_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.store_file {
            return Ok(path.clone());
        }
        default_store_path()
    }
}

pub fn default_store_path() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_STORE_FILENAME))
        .ok_or_else(|| DogearError::Config("Could not determine home directory".to_string()))
}

/// Directory holding `config.json`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "dogear", "dogear")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DogearError::Config("Could not determine config dir".to_string()))
}
