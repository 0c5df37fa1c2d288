//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated once at startup from environment variables (and an optional
//! `.env` file) and is read-only afterwards.

use tracing::{info, warn};
use url::Url;

/// Default Arcjet API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.arcjet.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream Arcjet API configuration.
    pub arcjet: ArcjetConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Arcjet API client.
#[derive(Clone)]
pub struct ArcjetConfig {
    /// Base URL of the Arcjet API.
    pub base_url: Url,

    /// Session credential sent as the `session` cookie.
    pub api_key: Option<String>,

    /// `User-Agent` header sent on every request.
    pub user_agent: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ArcjetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcjetConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ArcjetConfig {
    /// Configuration pointing at `base_url` with the given credential.
    pub fn new(base_url: Url, api_key: Option<String>) -> Self {
        Self {
            base_url,
            api_key,
            ..Self::default()
        }
    }
}

impl Default for ArcjetConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            api_key: None,
            user_agent: format!("arcjet-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "arcjet".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            arcjet: ArcjetConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings are prefixed with `MCP_` (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`). The Arcjet credential is read from `ARCJET_API_KEY`
    /// and the endpoint can be overridden with `ARCJET_API_BASE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base) = std::env::var("ARCJET_API_BASE") {
            match Url::parse(&base) {
                Ok(url) => {
                    info!("Using Arcjet API base from environment: {}", url);
                    config.arcjet.base_url = url;
                }
                Err(e) => warn!(
                    "Ignoring invalid ARCJET_API_BASE '{}': {}. Using {}",
                    base, e, DEFAULT_API_BASE
                ),
            }
        }

        match std::env::var("ARCJET_API_KEY") {
            Ok(api_key) => {
                config.arcjet.api_key = Some(api_key);
                info!("Arcjet API key loaded from environment");
            }
            Err(_) => warn!(
                "ARCJET_API_KEY not set - requests will be sent without a session \
                 and rejected by the Arcjet API"
            ),
        }

        config
    }
}
