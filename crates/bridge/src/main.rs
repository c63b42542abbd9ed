//! Commerce Bridge - Squarespace Commerce pass-through API.
//!
//! This binary serves the bridge on `BRIDGE_HOST:PORT` (default 0.0.0.0:8080).
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - Squarespace Commerce API as the only data source
//! - No database, no cache, no sessions
//!
//! # Security
//!
//! The bridge forwards a single configured bearer credential upstream. It does
//! not authenticate its own callers; CORS limits browser access to one origin.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use commerce_bridge::{AppState, BridgeConfig, router, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from environment (needed for Sentry init)
    let config = match BridgeConfig::from_env() {
        Ok(config) => config,
        Err(e) => return startup_failure("Failed to load configuration", &e),
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(config.log_format);

    if !config.squarespace.has_credentials() {
        tracing::warn!("No Squarespace credentials configured; upstream calls will be rejected");
    }

    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(e) => return startup_failure("Failed to initialize application state", &e),
    };

    let app = router(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => return startup_failure("Failed to bind to address", &e),
    };
    tracing::info!("commerce-bridge listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Report a fatal startup error on both stderr and the log.
#[allow(clippy::print_stderr)]
fn startup_failure(context: &str, error: &dyn std::error::Error) -> ExitCode {
    eprintln!("{context}: {error}");
    tracing::error!(error = %error, "{context}");
    ExitCode::FAILURE
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
