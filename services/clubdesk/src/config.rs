//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults.
//! Unlike a service, the CLI must work out of the box, so a missing config
//! file falls back to defaults pointing at the hosted API instead of
//! failing. `CLUBDESK_API_URL` overrides the base URL either way.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Hosted API origin used when no config overrides it.
pub const DEFAULT_API_URL: &str = "https://website-qlclb.onrender.com/api";

/// Root configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote API settings
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Local credential file settings
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from("clubdesk-credentials.json")
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment
    /// variables. A missing file yields the defaults.
    pub fn load(path: &Path) -> common::Result<Self> {
        let mut config: Config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        // Env var takes precedence over the file
        if let Ok(url) = std::env::var("CLUBDESK_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.api.base_url = url.to_owned();
            }
        }

        // Validate base_url is a URL with an http(s) scheme
        if !config.api.base_url.starts_with("http://")
            && !config.api.base_url.starts_with("https://")
        {
            return Err(common::Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                config.api.base_url
            )));
        }

        // Validate timeout_secs is non-zero
        if config.api.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("clubdesk.toml")
    }
}
