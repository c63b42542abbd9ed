//! Parsing of caller-supplied query and path parameters.
//!
//! Raw values arrive as strings so that malformed numbers produce an
//! `invalid_parameter` envelope instead of an extractor rejection.

use axum::extract::{Path, rejection::PathRejection};

use commerce_bridge_core::IdError;

use crate::error::{AppError, Result};

/// Page size used when the caller does not give one.
pub const DEFAULT_LIMIT: u64 = 20;

/// Parsed `limit`/`offset` pair, ready for an upstream query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Window {
    /// Parse raw `limit` and `offset` values.
    ///
    /// A present value must be a signed integer. Absent `limit` becomes
    /// [`DEFAULT_LIMIT`]; absent `offset` stays absent. Zero and negative
    /// values are dropped so they never reach upstream.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` naming the first bad parameter.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self> {
        let limit = match limit {
            Some(raw) => positive(parse_integer("limit", raw)?),
            None => Some(DEFAULT_LIMIT),
        };
        let offset = match offset {
            Some(raw) => positive(parse_integer("offset", raw)?),
            None => None,
        };
        Ok(Self { limit, offset })
    }
}

fn parse_integer(name: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::InvalidParameter(format!("Invalid {name} parameter")))
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|v| *v > 0)
}

/// Treat an empty filter value as absent.
pub fn filter(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a path identifier, mapping an empty one to `missing_parameter`.
///
/// # Errors
///
/// Returns `AppError::MissingParameter` with "`{label}` ID is required".
pub fn require_id<T>(
    raw: &str,
    label: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, IdError>,
) -> Result<T> {
    parse(raw).map_err(|_| AppError::MissingParameter(format!("{label} ID is required")))
}

/// Unwrap a path extractor result and parse the identifier it carries.
///
/// A segment axum cannot decode (invalid UTF-8 after percent-decoding) is an
/// `invalid_parameter`; a blank one is a `missing_parameter`.
///
/// # Errors
///
/// Returns `AppError::InvalidParameter` or `AppError::MissingParameter`.
pub fn path_id<T>(
    path: std::result::Result<Path<String>, PathRejection>,
    label: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, IdError>,
) -> Result<T> {
    let Path(raw) = path.map_err(|e| {
        AppError::InvalidParameter(format!("Invalid {label} ID: {}", e.body_text()))
    })?;
    require_id(&raw, label, parse)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use commerce_bridge_core::ProductId;

    use super::*;
    use crate::envelope::ErrorKind;

    #[test]
    fn test_defaults() {
        let window = Window::parse(None, None).unwrap();
        assert_eq!(window.limit, Some(DEFAULT_LIMIT));
        assert_eq!(window.offset, None);
    }

    #[test]
    fn test_explicit_values() {
        let window = Window::parse(Some("5"), Some("40")).unwrap();
        assert_eq!(window.limit, Some(5));
        assert_eq!(window.offset, Some(40));
    }

    #[test]
    fn test_non_positive_values_are_dropped() {
        let window = Window::parse(Some("0"), Some("-3")).unwrap();
        assert_eq!(window.limit, None);
        assert_eq!(window.offset, None);
    }

    #[test]
    fn test_invalid_limit() {
        let err = Window::parse(Some("abc"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.to_string(), "Invalid limit parameter");
    }

    #[test]
    fn test_invalid_offset() {
        let err = Window::parse(Some("10"), Some("1.5")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid offset parameter");
    }

    #[test]
    fn test_empty_limit_is_invalid() {
        assert!(Window::parse(Some(""), None).is_err());
    }

    #[test]
    fn test_empty_filter_is_absent() {
        assert_eq!(filter(Some(String::new())), None);
        assert_eq!(filter(Some("shirts".to_string())), Some("shirts".to_string()));
    }

    #[test]
    fn test_require_id() {
        let id = require_id("p1", "Product", ProductId::parse).unwrap();
        assert_eq!(id.as_str(), "p1");

        let err = require_id("  ", "Product", ProductId::parse).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert_eq!(err.to_string(), "Product ID is required");
    }
}
