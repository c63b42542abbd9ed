//! CORS policy for browser callers.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the CORS layer for a single allowed origin.
///
/// An origin that is not a valid header value is logged and ignored, which
/// leaves cross-origin requests disallowed.
pub fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!(origin = allowed_origin, error = %e, "Invalid CORS origin, ignoring");
            layer
        }
    }
}
