//! Core types for Commerce Bridge.
//!
//! This module provides type-safe wrappers for the commerce resources proxied
//! from Squarespace.

pub mod id;
pub mod money;
pub mod order;
pub mod pagination;
pub mod product;
pub mod status;

pub use id::*;
pub use money::Money;
pub use order::*;
pub use pagination::{Page, Pagination};
pub use product::*;
pub use status::{CheckStatus, HealthStatus};
