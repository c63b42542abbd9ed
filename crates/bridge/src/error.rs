//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding. All route handlers return `Result<T, AppError>`,
//! and every error is rendered as an error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::{Envelope, ErrorKind};
use crate::squarespace::SquarespaceError;

/// Application-level error type for the bridge.
#[derive(Debug, Error)]
pub enum AppError {
    /// A query parameter failed to parse.
    #[error("{0}")]
    InvalidParameter(String),

    /// A required path parameter is missing.
    #[error("{0}")]
    MissingParameter(String),

    /// A request body is well-formed but incomplete.
    #[error("{0}")]
    Validation(String),

    /// A request body could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Known path, unsupported method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Upstream call failed on a read or update.
    #[error("{context}: {source}")]
    Upstream {
        context: String,
        #[source]
        source: SquarespaceError,
    },

    /// Upstream call failed while creating a resource.
    #[error("{context}: {source}")]
    Creation {
        context: String,
        #[source]
        source: SquarespaceError,
    },
}

impl AppError {
    /// Map a failed single-resource lookup.
    ///
    /// Upstream 4xx becomes `not_found`; anything else is an upstream error.
    #[must_use]
    pub fn lookup(resource: &str, source: SquarespaceError) -> Self {
        if source.is_not_found() {
            Self::NotFound(format!("{resource} not found: {source}"))
        } else {
            Self::Upstream {
                context: format!("Failed to fetch {}", resource.to_lowercase()),
                source,
            }
        }
    }

    /// Map a failed upstream call that is not a single-resource lookup.
    #[must_use]
    pub fn upstream(context: impl Into<String>, source: SquarespaceError) -> Self {
        Self::Upstream {
            context: context.into(),
            source,
        }
    }

    /// The machine-readable category reported to callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::MissingParameter(_) => ErrorKind::MissingParameter,
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            Self::Upstream { .. } => ErrorKind::ApiError,
            Self::Creation { .. } => ErrorKind::CreationError,
        }
    }

    /// The HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_)
            | Self::MissingParameter(_)
            | Self::Validation(_)
            | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { .. } | Self::Creation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, kind = ?self.kind(), "Request rejected");
        }

        // Upstream messages are passed through verbatim
        let body = Envelope::<()>::error(self.kind(), self.to_string());

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::InvalidParameter("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::MissingParameter("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Validation("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::MethodNotAllowed("x".to_string())),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            get_status(AppError::upstream("x", SquarespaceError::Status(503))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Creation {
                context: "x".to_string(),
                source: SquarespaceError::Status(400),
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_lookup_classification() {
        let not_found = AppError::lookup("Order", SquarespaceError::Status(404));
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(
            not_found.to_string(),
            "Order not found: API request failed with status 404"
        );

        let upstream = AppError::lookup("Order", SquarespaceError::Status(500));
        assert_eq!(upstream.kind(), ErrorKind::ApiError);
        assert_eq!(
            upstream.to_string(),
            "Failed to fetch order: API request failed with status 500"
        );
    }

    #[tokio::test]
    async fn test_error_envelope_body() {
        let response = AppError::Validation("Email is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["type"], "validation_error");
        assert_eq!(json["error"]["message"], "Email is required");
        assert!(json.get("data").is_none());
    }
}
