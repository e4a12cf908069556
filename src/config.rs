//! Race configuration
//!
//! Loaded from a YAML file when one exists; every field has a default so an
//! empty or missing file yields a working configuration.

use crate::lookup::{ARTICLE_BASE_URL, EXISTENCE_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for the search and its lookup collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    /// Maximum lookups in flight at once
    pub max_concurrent_lookups: usize,
    /// Per-lookup timeout; a timeout counts as a dead end
    pub lookup_timeout_secs: u64,
    /// Stop after this many rounds (unbounded when absent)
    pub max_rounds: Option<usize>,
    /// Base prepended to `/wiki/...` article links
    pub article_base_url: String,
    /// Base used for the existence check
    pub existence_base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 32,
            lookup_timeout_secs: 10,
            max_rounds: None,
            article_base_url: ARTICLE_BASE_URL.to_string(),
            existence_base_url: EXISTENCE_BASE_URL.to_string(),
            user_agent: format!("wikirace/{}", crate::VERSION),
        }
    }
}

impl RaceConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RaceConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Load from `path` if given, else the default location if it exists,
    /// else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(default) if default.is_file() => Self::load(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_lookups == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_lookups must be at least 1".into(),
            ));
        }
        if self.lookup_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "lookup_timeout_secs must be at least 1".into(),
            ));
        }
        if self.max_rounds == Some(0) {
            return Err(ConfigError::Invalid("max_rounds must be at least 1".into()));
        }
        Ok(())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Default config location (~/.config/wikirace/config.yaml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wikirace").join("config.yaml"))
}
