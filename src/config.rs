//! Configuration management for Parlor
//!
//! Parses TOML configuration files and provides typed access to settings.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_request_timeout() -> u64 {
    120
}

/// Model endpoint configuration
///
/// One fixed endpoint: every chat message is forwarded to `generate_url`
/// with `name` as the model identifier. The defaults point at a local
/// Ollama instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,
    #[serde(default = "default_generate_url")]
    pub generate_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            generate_url: default_generate_url(),
        }
    }
}

fn default_model_name() -> String {
    "gemma2:latest".to_string()
}

fn default_generate_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::AppResult<Self> {
        let path_display = path.as_ref().display().to_string();

        // Phase 1: Read file (preserves io::Error context)
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            crate::error::AppError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        // Phase 2: Parse TOML (preserves toml::de::Error context)
        let config: Self = toml::from_str(&content).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            }
        })?;

        // Phase 3: Validate parsed config (provides contextual reason)
        config
            .validate()
            .map_err(|e| crate::error::AppError::ConfigValidationFailed {
                path: path_display,
                reason: e.to_string(),
            })?;

        Ok(config)
    }

    /// Validate configuration after parsing
    ///
    /// This is called automatically by `from_file()`, but can also be called
    /// explicitly when constructing Config via other means (e.g., in tests).
    pub fn validate(&self) -> crate::error::AppResult<()> {
        // Validate host: must be a bindable IP address
        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(crate::error::AppError::Config(format!(
                "server.host '{}' is not a valid IP address. \
                Use '0.0.0.0' for all interfaces or '127.0.0.1' for localhost only.",
                self.server.host
            )));
        }

        // Validate request timeout: one message means one upstream request,
        // so the budget bounds the whole generation
        if self.server.request_timeout_seconds == 0 {
            return Err(crate::error::AppError::Config(
                "server.request_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.server.request_timeout_seconds > 600 {
            return Err(crate::error::AppError::Config(format!(
                "server.request_timeout_seconds cannot exceed 600 seconds (10 minutes), got {}",
                self.server.request_timeout_seconds
            )));
        }

        // Validate model name: forwarded verbatim in every generate request
        if self.model.name.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "model.name cannot be empty".to_string(),
            ));
        }

        // Validate generate_url: must start with http:// or https://
        if !self.model.generate_url.starts_with("http://")
            && !self.model.generate_url.starts_with("https://")
        {
            return Err(crate::error::AppError::Config(format!(
                "model.generate_url '{}' is invalid. \
                generate_url must start with 'http://' or 'https://'.",
                self.model.generate_url
            )));
        }

        // Validate generate_url: must end with /api/generate
        // Catches configs that supply only the base URL (e.g. "http://host:11434"),
        // which would POST to the server root instead of the generate route
        if !self.model.generate_url.ends_with("/api/generate") {
            return Err(crate::error::AppError::Config(format!(
                "model.generate_url '{}' is invalid. \
                generate_url must end with '/api/generate' \
                (e.g. 'http://localhost:11434/api/generate').",
                self.model.generate_url
            )));
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = crate::error::AppError;

    fn from_str(toml_str: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(toml_str).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: "<string>".to_string(),
                source,
            }
        })?;

        // Validate config before returning
        config.validate()?;
        Ok(config)
    }
}
