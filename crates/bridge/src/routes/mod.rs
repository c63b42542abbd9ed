//! HTTP route handlers for the bridge.
//!
//! # Route Structure
//!
//! ```text
//! GET   /                              - Service info
//! GET   /health                        - Health report
//!
//! # API (nested under /api/v1)
//! GET   /api/v1/health                 - Health report
//! GET   /api/v1/products               - Product listing (limit, offset, category, tag)
//! GET   /api/v1/products/{id}          - Product detail
//! GET   /api/v1/products/{id}/variants - Product variants
//! GET   /api/v1/orders                 - Order listing (limit, offset, status, customerId)
//! POST  /api/v1/orders                 - Create order
//! GET   /api/v1/orders/{id}            - Order detail
//! GET   /api/v1/inventory/{id}         - Stock level
//! PATCH /api/v1/inventory/{id}         - Set stock quantity
//! GET   /api/v1/customers/{id}         - Customer profile address
//! ```
//!
//! Unknown paths answer with a `not_found` error envelope, and unsupported
//! methods on known paths with `method_not_allowed`.

pub mod customers;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod params;
pub mod products;

use axum::{
    Router,
    http::{Request, Response},
    middleware,
    routing::get,
};
use serde::Serialize;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::envelope::Envelope;
use crate::error::AppError;
use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/variants", get(products::variants))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/{id}", get(orders::show))
}

/// Create the inventory routes router.
pub fn inventory_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(inventory::show).patch(inventory::update))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(customers::show))
}

/// Create the versioned API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .nest("/inventory", inventory_routes())
        .nest("/customers", customer_routes())
}

/// Build the complete application router with middleware.
///
/// Sentry layers are added by the binary so tests can drive this router
/// without a Sentry client.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors_allowed_origin);

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health::health))
        .nest("/api/v1", api_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: std::time::Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(cors)
        .with_state(state)
}

/// Static description of the service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub api: &'static str,
    pub health: &'static str,
}

async fn service_info() -> Envelope<ServiceInfo> {
    Envelope::data(ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        api: "/api/v1",
        health: "/health",
    })
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".to_string())
}
