/// Configuration management for the folio service
///
/// Handles server binding and where portfolio content comes from.

use serde::{Deserialize, Serialize};

/// Default GraphQL endpoint serving projects and notes
pub const DEFAULT_API_URL: &str = "https://api.andr3w.sh/query";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Content configuration
    pub content: ContentConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Where projects and notes are loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSourceKind {
    /// In-repo data literals compiled into the binary
    Local,
    /// Remote GraphQL endpoint
    Remote,
}

impl ContentSourceKind {
    /// Parse a source name case-insensitively ("local" / "remote")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "local" => Some(Self::Local),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Which backend serves projects and notes
    pub source: ContentSourceKind,
    /// GraphQL endpoint used when `source` is `Remote`
    pub api_url: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("FOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("FOLIO_PORT")
                    .unwrap_or_else(|_| "4321".to_string())
                    .parse()
                    .unwrap_or(4321),
            },
            content: ContentConfig {
                source: std::env::var("FOLIO_CONTENT_SOURCE")
                    .ok()
                    .and_then(|value| ContentSourceKind::parse(&value))
                    .unwrap_or(ContentSourceKind::Local),
                api_url: std::env::var("FOLIO_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            },
        }
    }
}
