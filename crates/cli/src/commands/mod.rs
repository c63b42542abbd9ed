//! CLI command implementations.
//!
//! Every command builds its client from [`Context`] and prints its result
//! to stdout as pretty JSON.

pub mod customers;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod products;

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use commerce_bridge::{BridgeConfig, ConfigError, SquarespaceClient, SquarespaceError};
use commerce_bridge_core::IdError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The upstream call failed.
    #[error("Squarespace error: {0}")]
    Squarespace(#[from] SquarespaceError),

    /// An ID argument was blank.
    #[error("Invalid ID: {0}")]
    InvalidId(#[from] IdError),

    /// The result could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// The result could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration and client shared by all commands.
pub struct Context {
    pub config: BridgeConfig,
    pub client: SquarespaceClient,
}

impl Context {
    /// Load configuration from the environment and build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the client
    /// cannot be built.
    pub fn from_env() -> Result<Self, CommandError> {
        let config = BridgeConfig::from_env()?;
        let client = SquarespaceClient::new(&config.squarespace)?;
        tracing::debug!(base_url = %config.squarespace.base_url, "Using Squarespace API");
        Ok(Self { config, client })
    }
}

/// Write a value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
