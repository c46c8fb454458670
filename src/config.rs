use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Global configuration for lathe, loaded from `~/.lathe/config.toml`.
///
/// A missing config file yields the defaults; a present but unparseable
/// file is an error so typos don't silently fall back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author name stamped on published marketplace entries
    pub author: String,
    /// Default directory for generated projects (current dir when unset)
    pub target_dir: Option<PathBuf>,
    /// Cache entry time-to-live in seconds
    pub cache_ttl_secs: i64,
    /// Interval between cache sweeps in seconds
    pub cache_sweep_interval_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: "anonymous".to_string(),
            target_dir: None,
            cache_ttl_secs: 24 * 60 * 60,
            cache_sweep_interval_secs: 60 * 60,
        }
    }
}

impl Config {
    /// Load configuration from the global config file
    pub fn load() -> Result<Self> {
        let path = paths::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Write configuration back to the global config file
    pub fn save(&self) -> Result<()> {
        let path = paths::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.author, "anonymous");
        assert!(config.target_dir.is_none());
        assert_eq!(config.cache_ttl_secs, 86400);
        assert_eq!(config.cache_sweep_interval_secs, 3600);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("author = \"nic\"").unwrap();
        assert_eq!(config.author, "nic");
        assert_eq!(config.cache_ttl_secs, 86400);
    }
}
