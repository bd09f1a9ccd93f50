//! Application configuration
//!
//! Loaded from a TOML file (`ECOTRAJET_CONFIG` env var, falling back to
//! `ecotrajet.toml` in the working directory). Every field has a default so a
//! missing file yields a fully usable development configuration.

use integration_routing::{NominatimConfig, RoutingConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        /// Path that was attempted
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// A configuration value is invalid
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all, development mode)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// OSRM routing service settings
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Nominatim geocoding service settings
    #[serde(default)]
    pub geocoding: NominatimConfig,
}

impl AppConfig {
    /// Load configuration from the default location
    ///
    /// Reads the path from `ECOTRAJET_CONFIG`, falling back to
    /// `ecotrajet.toml`.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when a
    /// value fails validation. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("ECOTRAJET_CONFIG").unwrap_or_else(|_| "ecotrajet.toml".to_string());
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when a
    /// value fails validation.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config = if std::path::Path::new(path).exists() {
            let contents =
                std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
                    path: path.to_string(),
                    source,
                })?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid(
                "server.port must be greater than 0".to_string(),
            ));
        }
        self.routing.validate().map_err(ConfigError::Invalid)?;
        self.geocoding.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.allowed_origins.is_empty());
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
            [server]
            port = 8080

            [routing]
            base_url = "http://localhost:5000"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.routing.base_url, "http://localhost:5000");
        assert_eq!(
            config.geocoding.base_url,
            "https://nominatim.openstreetmap.org"
        );
    }

    #[test]
    fn parse_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.routing.base_url, "https://router.project-osrm.org");
    }

    #[test]
    fn zero_port_is_invalid() {
        let config: AppConfig = toml::from_str("[server]\nport = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_routing_section_is_rejected() {
        let config: AppConfig = toml::from_str("[routing]\nbase_url = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_geocoding_section_is_rejected() {
        let config: AppConfig = toml::from_str("[geocoding]\ntimeout_secs = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from("/nonexistent/ecotrajet.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn serialization_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.routing.base_url, config.routing.base_url);
    }
}
