//! # Configuration
//!
//! Settings live in `config.json` inside the data directory, next to the
//! collection slots. A missing file means all defaults; missing keys in an
//! existing file fall back to their defaults individually.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `confirm-deletes` | `true` | Ask before deleting records or resetting collections |
//! | `seed-empty` | `true` | Populate an absent collection from the bundled samples |
//! | `log-filter` | `warn` | Default tracing filter (overridden by `MEDIASHELF_LOG`) |
//!
//! ## CLI Usage
//!
//! - `mediashelf config`: Show all configuration values.
//! - `mediashelf config <key>`: Get a specific value.
//! - `mediashelf config <key> <value>`: Set a value.

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_FILTER: &str = "warn";

pub const KEYS: [&str; 3] = ["confirm-deletes", "seed-empty", "log-filter"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ShelfConfig {
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,

    #[serde(default = "default_true")]
    pub seed_empty: bool,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            confirm_deletes: true,
            seed_empty: true,
            log_filter: default_log_filter(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        let tmp_path = config_dir.join(format!(".config-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp_path, config_dir.join(CONFIG_FILENAME)).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "confirm-deletes" => Some(self.confirm_deletes.to_string()),
            "seed-empty" => Some(self.seed_empty.to_string()),
            "log-filter" => Some(self.log_filter.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "confirm-deletes" => self.confirm_deletes = parse_bool(key, value)?,
            "seed-empty" => self.seed_empty = parse_bool(key, value)?,
            "log-filter" => {
                if value.trim().is_empty() {
                    return Err("log-filter cannot be empty".to_string());
                }
                self.log_filter = value.trim().to_string();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("{} expects true or false, got '{}'", key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert!(config.confirm_deletes);
        assert!(config.seed_empty);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = ShelfConfig::default();
        config.set("confirm-deletes", "no").unwrap();
        config.save(&dir).unwrap();

        let loaded = ShelfConfig::load(&dir).unwrap();
        assert!(!loaded.confirm_deletes);
        assert!(loaded.seed_empty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"seed-empty": false}"#).unwrap();

        let config = ShelfConfig::load(temp.path()).unwrap();
        assert!(!config.seed_empty);
        assert!(config.confirm_deletes);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = ShelfConfig::default();
        config.set("log-filter", "mediashelf=debug").unwrap();
        assert_eq!(config.get("log-filter").as_deref(), Some("mediashelf=debug"));

        assert!(config.set("seed-empty", "maybe").is_err());
        assert!(config.set("nope", "1").is_err());
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<&str> = ShelfConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}
