//! Squarespace Commerce API client.
//!
//! # Architecture
//!
//! - Plain REST + JSON over `reqwest`, one outbound request per operation
//! - Squarespace is the source of truth - no local storage, no caching
//! - No retries: a single upstream failure surfaces immediately
//! - Every request is bounded by a fixed 30 second timeout
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_bridge::squarespace::{ProductQuery, SquarespaceClient};
//!
//! let client = SquarespaceClient::new(&config.squarespace)?;
//!
//! let page = client
//!     .list_products(&ProductQuery { limit: Some(10), ..ProductQuery::default() })
//!     .await?;
//! let variants = client.get_product_variants(&page.items[0].id).await?;
//! ```

mod client;
mod options;

pub use client::SquarespaceClient;
pub use options::{OrderQuery, ProductQuery};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the Squarespace API.
#[derive(Debug, Error)]
pub enum SquarespaceError {
    /// Transport failure: connection refused, timeout, body read error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned an error status with a structured error body.
    #[error("API error: {kind} - {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    /// Upstream returned an error status without a readable error body.
    #[error("API request failed with status {0}")]
    Status(u16),

    /// Upstream reported success but the body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client could not be built from the given configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl SquarespaceError {
    /// Classify an error response from its status and raw body.
    pub(crate) fn from_error_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(error) if !error.kind.is_empty() || !error.message.is_empty() => Self::Api {
                status,
                kind: error.kind,
                message: error.message,
            },
            _ => Self::Status(status),
        }
    }

    /// The upstream HTTP status, if upstream answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Status(status) => Some(*status),
            Self::Http(_) | Self::Decode(_) | Self::Config(_) => None,
        }
    }

    /// Whether upstream rejected the request with a 4xx status.
    ///
    /// Single-resource lookups treat every 4xx as "not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status().is_some_and(|status| (400..500).contains(&status))
    }
}

/// Structured error body returned by Squarespace.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
}
