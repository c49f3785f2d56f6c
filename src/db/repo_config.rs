//! Backend configuration file support.
//!
//! This module provides utilities for reading backend configuration from
//! TOML configuration files (`backend.toml`), covering the repository
//! selection, Postgres pool settings, and the external flight API endpoint.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Backend configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub postgres: PostgresSettings,
    #[serde(default)]
    pub flight_api: FlightApiSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Postgres connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostgresSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

/// External flight API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightApiSettings {
    /// GET endpoint returning the raw arrivals document. Empty means the
    /// live-sync endpoint stays disabled.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_flight_timeout")]
    pub timeout_secs: u64,
}

impl Default for FlightApiSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_flight_timeout(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_flight_timeout() -> u64 {
    15
}

impl BackendConfig {
    /// Load backend configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: BackendConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default location, if one exists.
    ///
    /// Searches for `backend.toml` in the current directory, then the parent
    /// directory.
    pub fn from_default_locations() -> Option<Self> {
        Self::find_config_file().and_then(|path| Self::from_file(path).ok())
    }

    fn find_config_file() -> Option<PathBuf> {
        let candidates = [PathBuf::from("backend.toml"), PathBuf::from("../backend.toml")];
        candidates.into_iter().find(|p| p.exists())
    }

    /// Parse the configured repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type)
            .map_err(RepositoryError::configuration)
    }

    /// Flight API endpoint, with `FLIGHT_API_URL` taking precedence over the
    /// config file.
    pub fn flight_api_url(&self) -> String {
        std::env::var("FLIGHT_API_URL").unwrap_or_else(|_| self.flight_api.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [repository]
            type = "local"

            [postgres]
            database_url = "postgres://localhost/lti"
            max_connections = 5

            [flight_api]
            base_url = "https://flights.example.test/arrivals"
            timeout_secs = 5
        "#;
        let config: BackendConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert_eq!(config.postgres.max_connections, 5);
        assert_eq!(config.postgres.min_connections, 1);
        assert_eq!(
            config.flight_api.base_url,
            "https://flights.example.test/arrivals"
        );
        assert_eq!(config.flight_api.timeout_secs, 5);
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config: BackendConfig = toml::from_str("[repository]\ntype = \"postgres\"").unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Postgres);
        assert_eq!(config.postgres.max_connections, 10);
        assert!(config.flight_api.base_url.is_empty());
        assert_eq!(config.flight_api.timeout_secs, 15);
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[repository]\ntype = \"local\"").unwrap();
        let config = BackendConfig::from_file(file.path()).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
    }

    #[test]
    fn test_bad_file_is_configuration_error() {
        let err = BackendConfig::from_file("/definitely/missing.toml").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_unknown_repository_type_rejected() {
        let config: BackendConfig = toml::from_str("[repository]\ntype = \"mongo\"").unwrap();
        assert!(config.repository_type().is_err());
    }
}
