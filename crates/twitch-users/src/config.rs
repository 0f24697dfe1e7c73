use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_NAME: &str = "twitch-users";
const CONFIG_FILE: &str = "config.json";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Application client ID sent as `Client-ID`
    #[serde(default)]
    pub client_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
    /// Token obtained elsewhere; the client does not run an OAuth flow
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_base_url() -> String {
    "https://api.twitch.tv/kraken".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            base_url: default_base_url(),
            timeout_sec: default_timeout(),
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with defaults for everything but the client ID
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Loads the configuration from the user config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the configuration from a specific file
    ///
    /// A missing file yields the defaults. A file that doesn't parse is logged
    /// and also yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path).context("Failed to read config file")?;
        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            Self::default()
        }))
    }

    /// Writes the configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json).context("Failed to write config file")?;
        Ok(())
    }

    /// Returns the request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }

    /// Returns the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_NAME))
    }
}
