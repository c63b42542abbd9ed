//! Bridge configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional. Empty values are treated as unset.
//!
//! - `BRIDGE_HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8080)
//! - `CORS_ALLOWED_ORIGIN` - Browser origin allowed to call the API
//!   (default: <https://adrienbird.net>)
//! - `SQUARESPACE_BASE_URL` - Commerce API base URL (default: <https://api.squarespace.com>)
//! - `SQUARESPACE_SITE_ID` - Site identifier; enables site-scoped endpoints
//! - `SQUARESPACE_ACCESS_TOKEN` - OAuth access token (preferred credential)
//! - `SQUARESPACE_API_KEY` - API key, used when no access token is set
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `LOG_FORMAT` - `json` for JSON log lines, anything else for text
//!
//! Missing credentials are not a load error: the health endpoint reports them
//! and upstream rejects unauthenticated calls.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_BASE_URL: &str = "https://api.squarespace.com";
const DEFAULT_CORS_ORIGIN: &str = "https://adrienbird.net";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Bridge application configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origin allowed by the CORS layer
    pub cors_allowed_origin: String,
    /// Squarespace Commerce API configuration
    pub squarespace: SquarespaceConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Log line format
    pub log_format: LogFormat,
}

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Squarespace Commerce API configuration.
///
/// Implements `Debug` manually to redact credentials.
#[derive(Clone)]
pub struct SquarespaceConfig {
    /// API base URL (scheme + host, optionally a path prefix)
    pub base_url: Url,
    /// Site identifier for site-scoped endpoints
    pub site_id: Option<String>,
    /// API key credential
    pub api_key: Option<SecretString>,
    /// OAuth access token credential
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for SquarespaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SquarespaceConfig")
            .field("base_url", &self.base_url.as_str())
            .field("site_id", &self.site_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_or_default(&lookup, "BRIDGE_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BRIDGE_HOST".to_string(), e.to_string()))?;
        let port = get_or_default(&lookup, "PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            cors_allowed_origin: get_or_default(&lookup, "CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGIN),
            squarespace: SquarespaceConfig::from_lookup(&lookup)?,
            sentry_dsn: get_optional(&lookup, "SENTRY_DSN"),
            sentry_environment: get_optional(&lookup, "SENTRY_ENVIRONMENT"),
            log_format: LogFormat::from_value(get_optional(&lookup, "LOG_FORMAT").as_deref()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SquarespaceConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = get_or_default(lookup, "SQUARESPACE_BASE_URL", DEFAULT_BASE_URL);
        let base_url = parse_base_url(&raw_url).map_err(|reason| {
            ConfigError::InvalidEnvVar("SQUARESPACE_BASE_URL".to_string(), reason)
        })?;

        Ok(Self {
            base_url,
            site_id: get_optional(lookup, "SQUARESPACE_SITE_ID"),
            api_key: get_optional(lookup, "SQUARESPACE_API_KEY").map(SecretString::from),
            access_token: get_optional(lookup, "SQUARESPACE_ACCESS_TOKEN").map(SecretString::from),
        })
    }

    /// Create a configuration for the given base URL with no site or credentials.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            site_id: None,
            api_key: None,
            access_token: None,
        }
    }

    /// The bearer credential attached to upstream requests.
    ///
    /// The access token wins over the API key when both are set.
    #[must_use]
    pub fn credential(&self) -> Option<&SecretString> {
        [self.access_token.as_ref(), self.api_key.as_ref()]
            .into_iter()
            .flatten()
            .find(|secret| !secret.expose_secret().is_empty())
    }

    /// Whether any credential is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credential().is_some()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating empty values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Parse and sanity-check the upstream base URL.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.cannot_be_a_base() {
        return Err("URL cannot be used as a base".to_string());
    }
    Ok(url)
}
