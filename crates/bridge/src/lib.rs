//! Commerce Bridge library.
//!
//! A pass-through HTTP API over the Squarespace Commerce API. The crate is a
//! library so the router and upstream client can be driven from tests and
//! from the operator CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod squarespace;
pub mod state;
pub mod telemetry;

pub use config::{BridgeConfig, ConfigError, LogFormat, SquarespaceConfig};
pub use envelope::{Envelope, ErrorKind};
pub use error::AppError;
pub use routes::router;
pub use squarespace::{OrderQuery, ProductQuery, SquarespaceClient, SquarespaceError};
pub use state::AppState;
