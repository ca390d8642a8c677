//! API client configuration.
//!
//! Loaded from `~/.config/chit/config.toml`. A missing or empty file yields
//! the defaults; a present but unparseable file is an error.

use crate::paths::ChitPaths;
use chit_core::error::{ChitError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/comittes`, `/members`, ... routes hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Loads the configuration from the default config file path.
    pub fn load() -> Result<Self> {
        let path = ChitPaths::config_file()
            .map_err(|e| ChitError::config(format!("cannot resolve config path: {e}")))?;
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// A missing or empty file yields [`ApiConfig::default`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| ChitError::config(format!("failed to read {path:?}: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApiConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"https://chit.example.com/api\"\n").unwrap();

        let config = ApiConfig::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://chit.example.com/api");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [not toml").unwrap();

        assert!(ApiConfig::load_from(&path).is_err());
    }
}
