//! Configuration loaded from and saved to `config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PER_PAGE: usize = 10;

/// Configuration for todoz, stored as `config.json` in the app's config
/// directory. Every field has a default, so a missing or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Records shown per page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Pull the current page back into range when a filter change shrinks the
    /// result set. Off by default: the page stays put and the slice goes empty.
    #[serde(default)]
    pub clamp_on_filter_change: bool,

    /// Endpoint serving the record collection. When unset, the built-in sample
    /// collection is used.
    #[serde(default)]
    pub remote_url: Option<String>,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            clamp_on_filter_change: false,
            remote_url: None,
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodozConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if necessary.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.per_page, 10);
        assert!(!config.clamp_on_filter_change);
        assert!(config.remote_url.is_none());
    }

    #[test]
    fn test_load_missing_config_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = TodozConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let config = TodozConfig {
            per_page: 5,
            clamp_on_filter_change: true,
            remote_url: Some("https://example.test/todos".to_string()),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"per_page": 25}"#,
        )
        .unwrap();

        let loaded = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.per_page, 25);
        assert!(!loaded.clamp_on_filter_change);
        assert!(loaded.remote_url.is_none());
    }
}
