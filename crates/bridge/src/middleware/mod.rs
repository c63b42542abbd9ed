//! HTTP middleware stack for the bridge.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost, added in `main`)
//! 2. `TraceLayer` (request span with `request_id` field)
//! 3. Request ID (record on span, tag Sentry scope, echo header)
//! 4. CORS (single allowed origin)

pub mod cors;
pub mod request_id;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
