//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::squarespace::{SquarespaceClient, SquarespaceError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is immutable after
/// construction.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BridgeConfig,
    squarespace: SquarespaceClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Squarespace client cannot be built from the
    /// configuration.
    pub fn new(config: BridgeConfig) -> Result<Self, SquarespaceError> {
        let squarespace = SquarespaceClient::new(&config.squarespace)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                squarespace,
            }),
        })
    }

    /// Get a reference to the bridge configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    /// Get a reference to the Squarespace Commerce API client.
    #[must_use]
    pub fn squarespace(&self) -> &SquarespaceClient {
        &self.inner.squarespace
    }
}
