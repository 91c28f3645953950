//! # Configuration
//!
//! Where the backend lives and how long to wait for it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --api-url http://estoque.local:3000   --timeout-ms 5000            │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ESTOQUE_API_URL, ESTOQUE_TIMEOUT_MS                                │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or the platform config dir:                         │
//! │     ~/.config/estoque/estoque.toml (Linux)                             │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, 8000 ms                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Flags and environment are merged by clap (a flag beats its env var), so
//! this module only layers "file, then command line" over the defaults.
//!
//! ## Configuration File Format
//! ```toml
//! # estoque.toml
//! [api]
//! url = "http://localhost:3000"
//! timeout_ms = 8000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use estoque_api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

use crate::cli::Cli;

/// Configuration errors. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// API Settings
// =============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base address of the backend.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout (milliseconds).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete terminal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

impl AppConfig {
    /// Loads configuration from file and command line over the defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`--config`, else the platform default if it exists)
    /// 3. Environment variables and flags
    ///
    /// ## Errors
    /// An explicitly named config file that does not exist is an error; a
    /// missing default file is not.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.clone())),
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                other => {
                    debug!(path = ?other, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(cli.api_url.as_deref(), cli.timeout_ms);
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a config file body.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies command-line (or environment) values on top.
    pub fn apply_overrides(&mut self, api_url: Option<&str>, timeout_ms: Option<u64>) {
        if let Some(url) = api_url {
            debug!(url, "Overriding API URL");
            self.api.url = url.to_string();
        }

        if let Some(ms) = timeout_ms {
            debug!(timeout_ms = ms, "Overriding request timeout");
            self.api.timeout_ms = ms;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.url
            )));
        }

        if self.api.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeout_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// The HTTP client settings these values describe.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.url.trim()).timeout(Duration::from_millis(self.api.timeout_ms))
    }

    /// `<platform config dir>/estoque.toml`.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "estoque")
            .map(|dirs| dirs.config_dir().join("estoque.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.url, "http://localhost:3000");
        assert_eq!(config.api.timeout_ms, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str("[api]\nurl = \"http://estoque.local\"\n").unwrap();
        assert_eq!(config.api.url, "http://estoque.local");
        assert_eq!(config.api.timeout_ms, 8000);

        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let err = AppConfig::from_toml_str("[api]\ntimeout_ms = \"slow\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::from_toml_str("[api]\nurl = \"http://file\"\n").unwrap();

        config.apply_overrides(None, Some(1500));
        assert_eq!(config.api.url, "http://file");
        assert_eq!(config.api.timeout_ms, 1500);

        config.apply_overrides(Some("https://flag"), None);
        assert_eq!(config.api.url, "https://flag");
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();

        config.api.url = "localhost:3000".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.api.url = "https://estoque.example".to_string();
        config.api.timeout_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.api.timeout_ms = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_config() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("http://estoque.local:3000/"), Some(2500));

        let client = config.client_config();
        assert_eq!(client.base_url, "http://estoque.local:3000");
        assert_eq!(client.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_missing_explicit_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/estoque.toml")),
            api_url: None,
            timeout_ms: None,
        };
        assert!(matches!(AppConfig::load(&cli), Err(ConfigError::NotFound(_))));
    }
}
