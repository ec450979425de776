//! Client configuration management.
//!
//! Credentials come from the environment (`PCO_APP_ID`, `PCO_APP_SECRET`).
//! The base URL and request timeout may be set in an optional config file at
//! `~/.config/pcoclient/config.json` or overridden with `PCO_BASE_URL`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application name used for the config directory path
const APP_NAME: &str = "pcoclient";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Planning Center API root
pub const DEFAULT_BASE_URL: &str = "https://api.planningcenteronline.com";

pub const APP_ID_VAR: &str = "PCO_APP_ID";
pub const APP_SECRET_VAR: &str = "PCO_APP_SECRET";
pub const BASE_URL_VAR: &str = "PCO_BASE_URL";

#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    #[serde(skip)]
    pub app_id: String,
    #[serde(skip)]
    pub app_secret: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load the config file (if any), then apply the environment on top.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// The saved config file as-is, with no environment overrides.
    /// Defaults when there is no file.
    pub fn load_file() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::read_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply settings given on the command line. Unset values keep what is
    /// already configured.
    pub fn update_settings(&mut self, base_url: Option<String>, timeout_secs: Option<u64>) {
        if let Some(url) = base_url {
            self.base_url = Some(url);
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout_secs = Some(secs);
        }
    }

    /// Configuration from environment variables alone.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Missing credentials are not an error here; the API rejects them on
    /// the first request instead.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        match lookup(APP_ID_VAR) {
            Some(id) => self.app_id = id,
            None => warn!("{} is not set", APP_ID_VAR),
        }
        match lookup(APP_SECRET_VAR) {
            Some(secret) => self.app_secret = secret,
            None => warn!("{} is not set", APP_SECRET_VAR),
        }
        if let Some(url) = lookup(BASE_URL_VAR).filter(|u| !u.is_empty()) {
            self.base_url = Some(url);
        }
    }

    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
