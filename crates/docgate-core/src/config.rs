//! Configuration loading and defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default configuration file path
pub fn default_config_path() -> &'static str {
    "config/default.toml"
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GateConfig {
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the static credential list lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// URL of the JSON user list, fetched on every login attempt
    #[serde(default = "default_credentials_url")]
    pub url: String,
}

/// Page-gating defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Where denied visitors are sent when a page does not name its own
    /// fallback location
    #[serde(default = "default_fallback_location")]
    pub fallback_location: String,
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the durable session record
    #[serde(default = "default_session_path")]
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_credentials_url() -> String {
    "https://localhost/users.json".to_string()
}

fn default_fallback_location() -> String {
    "index.html".to_string()
}

fn default_session_path() -> String {
    ".docgate/session.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            url: default_credentials_url(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            fallback_location: default_fallback_location(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl GateConfig {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let config_path = Path::new(path);

        // Missing file is not an error: every section has usable defaults
        if !config_path.exists() {
            info!("Config file not found at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: GateConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        info!("Loaded configuration from {}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = GateConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.pages.fallback_location, "index.html");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: GateConfig = toml::from_str(
            r#"
            [credentials]
            url = "https://docs.example.com/users.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.credentials.url, "https://docs.example.com/users.json");
        assert_eq!(config.session.path, ".docgate/session.json");
    }
}
