use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub tmdb: TmdbOptions,
    #[serde(default)]
    pub notifications: NotificationOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TmdbOptions {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub include_adult: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotificationOptions {
    /// Rapid repeated toggles collapse into the latest notification
    /// within this window.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_debounce_ms() -> u64 {
    200
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb: TmdbOptions {
                api_key: String::new(),
                language: default_language(),
                include_adult: false,
            },
            notifications: NotificationOptions::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective API key: the config value, or the TMDB_API_KEY
    /// environment variable when the config leaves it empty.
    pub fn api_key(&self) -> Option<String> {
        if !self.tmdb.api_key.is_empty() {
            return Some(self.tmdb.api_key.clone());
        }
        std::env::var("TMDB_API_KEY").ok().filter(|k| !k.is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key().is_none() {
            return Err(anyhow::anyhow!(
                "TMDB API key is required: set [tmdb] api_key in config.toml or the TMDB_API_KEY environment variable"
            ));
        }
        Ok(())
    }
}
