//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from the process environment (and
//! an optional `.env` file), then passed explicitly to the server. Nothing
//! reads the environment after that.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::pylon::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Pylon API token.
pub const API_TOKEN_VAR: &str = "PYLON_API_TOKEN";

/// Environment variable overriding the Pylon API base URL.
pub const API_BASE_URL_VAR: &str = "PYLON_API_BASE_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Pylon API endpoint configuration.
    pub api: ApiConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Pylon API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is resolved against.
    pub base_url: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Bearer token for the Pylon API.
    pub api_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialsConfig {
    /// Return the API token, or a configuration error when it is not set.
    pub fn require_api_token(&self) -> Result<&str> {
        self.api_token.as_deref().ok_or_else(|| {
            Error::config(format!("{API_TOKEN_VAR} environment variable is required"))
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pylon-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, transport variables); Pylon settings use `PYLON_`.
    /// A missing token is not an error here; see
    /// [`CredentialsConfig::require_api_token`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var(API_BASE_URL_VAR) {
            config.api.base_url = base_url;
        }

        config.credentials.api_token = std::env::var(API_TOKEN_VAR)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        config
    }

    /// Return a copy of this configuration with the given API token.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.api_token = Some(token.into());
        self
    }
}
