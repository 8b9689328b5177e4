use crate::error::Result;
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Environment variable that overrides the stored metadata API key.
pub const API_KEY_ENV: &str = "SHELFLOG_API_KEY";

/// Configuration for shelflog, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShelflogConfig {
    /// Category shown when no category argument is given
    #[serde(default = "default_category")]
    pub active_category: Category,

    /// Metadata provider API key; lookups are disabled without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Metadata provider base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Quiescence window for the interactive lookup prompt, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_category() -> Category {
    Category::Movie
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for ShelflogConfig {
    fn default() -> Self {
        Self {
            active_category: default_category(),
            api_key: None,
            api_url: default_api_url(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl ShelflogConfig {
    /// Load config from the given directory, or return defaults if not
    /// found or unreadable. A corrupt config never blocks startup.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path)
            .map_err(crate::error::ShelflogError::Io)
            .and_then(|content| Ok(serde_json::from_str(&content)?))
        {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to the given directory
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

    /// The usable API key: environment override first, then the stored key.
    /// Empty strings count as unset.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ShelflogConfig::default();
        assert_eq!(config.active_category, Category::Movie);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.debounce_ms, 300);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelflogConfig::load(dir.path().join("nope"));
        assert_eq!(config, ShelflogConfig::default());
    }

    #[test]
    fn corrupt_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "][").unwrap();
        let config = ShelflogConfig::load(dir.path());
        assert_eq!(config, ShelflogConfig::default());
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = ShelflogConfig::default();
        config.active_category = Category::Book;
        config.api_key = Some("k".to_string());
        config.save(dir.path()).unwrap();

        let loaded = ShelflogConfig::load(dir.path());
        assert_eq!(loaded, config);
    }

    #[test]
    fn blank_stored_key_counts_as_unset() {
        let config = ShelflogConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        // Ignore the env override when the variable is not set in the test
        // environment; the stored blank key must still be filtered out.
        if std::env::var(API_KEY_ENV).is_err() {
            assert!(config.api_key().is_none());
        }
    }
}
