//! Runtime configuration
//!
//! Values come from `<data_dir>/config.json` when present, then environment
//! overrides, then built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{QuoteError, QuoteResult};

/// Environment variable names
pub mod env_vars {
    pub const HOME: &str = "QUOTEBOOK_HOME";
    pub const SERVER_URL: &str = "QUOTEBOOK_SERVER_URL";
    pub const SYNC_INTERVAL: &str = "QUOTEBOOK_SYNC_INTERVAL";
}

/// Default values
pub mod defaults {
    pub const SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";
    pub const SYNC_INTERVAL_SECS: u64 = 30;
    pub const FETCH_LIMIT: usize = 5;
    pub const DATA_DIR_NAME: &str = ".quotebook";
    pub const DATABASE_FILE: &str = "quotebook.db";
    pub const CONFIG_FILE: &str = "config.json";
}

/// Quotebook settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote posts endpoint used for sync
    pub server_url: String,
    /// Seconds between periodic syncs
    pub sync_interval_secs: u64,
    /// Number of remote posts taken per fetch
    pub fetch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: defaults::SERVER_URL.to_string(),
            sync_interval_secs: defaults::SYNC_INTERVAL_SECS,
            fetch_limit: defaults::FETCH_LIMIT,
        }
    }
}

impl Config {
    /// Load config for a data directory, applying environment overrides
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn load(data_dir: &Path) -> QuoteResult<Self> {
        let path = data_dir.join(defaults::CONFIG_FILE);
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| QuoteError::io(&path, &e))?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env_vars::SERVER_URL).filter(|u| !u.is_empty()) {
            self.server_url = url;
        }
        if let Some(secs) = lookup(env_vars::SYNC_INTERVAL).and_then(|s| s.parse().ok()) {
            self.sync_interval_secs = secs;
        }
    }

    /// Interval between periodic syncs (never zero)
    #[must_use]
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs.max(1))
    }
}

/// Resolve the data directory
///
/// Order: explicit path, `QUOTEBOOK_HOME`, `$HOME/.quotebook`.
#[must_use]
pub fn resolve_data_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(home) = std::env::var_os(env_vars::HOME).filter(|h| !h.is_empty()) {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir().map(|home| home.join(defaults::DATA_DIR_NAME))
}
