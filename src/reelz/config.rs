//! # Configuration
//!
//! Stored as `config.json` in the data directory. Missing keys take their defaults,
//! a missing file means all defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `source` | `fixtures` | Where movies come from: `fixtures` or `tmdb` |
//! | `api-url` | `https://api.themoviedb.org/3` | Catalog base URL |
//! | `api-key` | none | Catalog API key, `TMDB_API_KEY` is used when unset |
//! | `favorites-key` | `movieFavorites` | Storage key for the favorites list |

use crate::error::{ReelzError, Result};
use crate::favorites::DEFAULT_FAVORITES_KEY;
use crate::source::tmdb::DEFAULT_API_URL;
use crate::store::fs::validate_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Fixtures,
    Tmdb,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Fixtures => f.write_str("fixtures"),
            SourceKind::Tmdb => f.write_str("tmdb"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = ReelzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixtures" | "mock" => Ok(SourceKind::Fixtures),
            "tmdb" => Ok(SourceKind::Tmdb),
            other => Err(ReelzError::Config(format!(
                "Unknown source '{}' (expected fixtures or tmdb)",
                other
            ))),
        }
    }
}

/// Configuration for reelz, stored in `{data_dir}/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ReelzConfig {
    #[serde(default)]
    pub source: SourceKind,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

impl Default for ReelzConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            api_url: default_api_url(),
            api_key: None,
            favorites_key: default_favorites_key(),
        }
    }
}

impl ReelzConfig {
    pub const KEYS: [&'static str; 4] = ["source", "api-url", "api-key", "favorites-key"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ReelzError::Io)?;
        let config: ReelzConfig =
            serde_json::from_str(&content).map_err(ReelzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ReelzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ReelzError::Serialization)?;
        fs::write(config_path, content).map_err(ReelzError::Io)?;
        Ok(())
    }

    /// Configured key, falling back to the environment.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "source" => Ok(self.source.to_string()),
            "api-url" => Ok(self.api_url.clone()),
            "api-key" => Ok(self.api_key.clone().unwrap_or_default()),
            "favorites-key" => Ok(self.favorites_key.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "source" => self.source = value.parse()?,
            "api-url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(ReelzError::Config(format!(
                        "api-url must be an http(s) URL, got '{}'",
                        value
                    )));
                }
                self.api_url = value.to_string();
            }
            "api-key" => {
                self.api_key = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "favorites-key" => {
                validate_key(value).map_err(|_| {
                    ReelzError::Config(format!(
                        "favorites-key '{}' is not a valid storage key",
                        value
                    ))
                })?;
                self.favorites_key = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ReelzError {
    ReelzError::Config(format!(
        "Unknown config key '{}' (known: {})",
        key,
        ReelzConfig::KEYS.join(", ")
    ))
}
