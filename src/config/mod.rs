use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::SortKey;
use crate::error::{Error, Result};

pub const API_KEY_ENV: &str = "CMC_API_KEY";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub api_key: String,
    pub cache_ttl_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cache_ttl_secs: 120,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub convert: String,
    pub page_size: usize,
    pub sort_by: SortKey,
    pub descending: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            convert: "USD".to_string(),
            page_size: 20,
            sort_by: SortKey::Rank,
            descending: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    pub limit: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            limit: 100,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// The API key is a secret, supplied out of band: the environment
    /// (via dotenv) overrides whatever the config file carries. Read
    /// once at process start.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api.api_key = key.trim().to_string();
            }
        }
    }
}
