//! Tracker Configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so an
//! empty object (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;
use crate::source::DEFAULT_SOURCE_URL;

/// Environment variable that overrides the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// CSV export the snapshot is fetched from
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Upstream request timeout in seconds (default: 30)
    #[serde(default = "default_source_timeout_secs")]
    pub source_timeout_secs: u64,

    /// Minimum log severity (default: "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_source_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            source_url: default_source_url(),
            source_timeout_secs: default_source_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl TrackerConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TrackerConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.severity()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply a `PORT` value taken from the environment
    pub fn with_port_override(mut self, port: Option<&str>) -> ConfigResult<Self> {
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        }
        Ok(self)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> ConfigResult<Self> {
        let port = std::env::var(PORT_ENV_VAR).ok();
        self.with_port_override(port.as_deref())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source_timeout_secs)
    }

    pub fn severity(&self) -> ConfigResult<Severity> {
        Severity::parse(&self.log_level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source_timeout(), Duration::from_secs(30));
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"port": 8080, "source_url": "http://localhost/rows.csv", "log_level": "warn"}}"#
        )
        .unwrap();

        let config = TrackerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.source_url, "http://localhost/rows.csv");
        assert_eq!(config.severity().unwrap(), Severity::Warn);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = TrackerConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_bad_log_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "chatty"}}"#).unwrap();

        let result = TrackerConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = TrackerConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_port_override() {
        let config = TrackerConfig::default().with_port_override(Some("4000")).unwrap();
        assert_eq!(config.port, 4000);

        let unchanged = TrackerConfig::default().with_port_override(None).unwrap();
        assert_eq!(unchanged.port, 3000);

        let bad = TrackerConfig::default().with_port_override(Some("http"));
        assert!(matches!(bad, Err(ConfigError::InvalidPort(_))));
    }
}
