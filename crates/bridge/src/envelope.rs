//! Uniform response envelope.
//!
//! Every handler answers with either `{"data": ..., "pagination": ...}` or
//! `{"error": {"type": ..., "message": ...}}`. The two shapes are variants of
//! one enum, so a response can never carry both.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use commerce_bridge_core::{Page, Pagination};

/// Machine-readable error categories exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidParameter,
    MissingParameter,
    ValidationError,
    InvalidRequest,
    NotFound,
    MethodNotAllowed,
    ApiError,
    CreationError,
}

/// Error descriptor carried by a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

/// Response envelope: exactly one of a payload or an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Data {
        data: T,
        #[serde(skip_serializing_if = "Option::is_none")]
        pagination: Option<Pagination>,
    },
    Error {
        error: ErrorBody,
    },
}

impl<T> Envelope<T> {
    /// Wrap a payload with no pagination.
    pub const fn data(data: T) -> Self {
        Self::Data {
            data,
            pagination: None,
        }
    }

    /// Wrap an error.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Error {
            error: ErrorBody {
                kind,
                message: message.into(),
            },
        }
    }
}

impl<T> From<Page<T>> for Envelope<Vec<T>> {
    fn from(page: Page<T>) -> Self {
        Self::Data {
            data: page.items,
            pagination: page.pagination,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_data_shape() {
        let value = serde_json::to_value(Envelope::data(json!({"id": "p1"}))).unwrap();
        assert_eq!(value, json!({"data": {"id": "p1"}}));
    }

    #[test]
    fn test_page_shape() {
        let page = Page {
            items: vec![1, 2],
            pagination: Some(Pagination {
                next_page: Some("cursor-2".to_string()),
                ..Pagination::default()
            }),
        };
        let value = serde_json::to_value(Envelope::from(page)).unwrap();
        assert_eq!(
            value,
            json!({"data": [1, 2], "pagination": {"nextPage": "cursor-2"}})
        );
    }

    #[test]
    fn test_error_shape() {
        let envelope = Envelope::<()>::error(ErrorKind::NotFound, "Order not found");
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(
            value,
            json!({"error": {"type": "not_found", "message": "Order not found"}})
        );
        assert!(value.get("data").is_none());
    }
}
