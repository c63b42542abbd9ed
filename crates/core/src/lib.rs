//! Commerce Bridge Core - Shared types library.
//!
//! This crate provides the commerce types used across all Commerce Bridge
//! components:
//! - `commerce-bridge` - HTTP service proxying the Squarespace Commerce API
//! - `commerce-bridge-cli` - Command-line probes against the same API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no HTTP clients. Every
//! resource type is a pass-through representation of the upstream JSON; the
//! bridge does not own their lifecycle.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, money, products, orders, pagination and health statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
