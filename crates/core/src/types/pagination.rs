//! Upstream pagination cursors.

use serde::{Deserialize, Serialize};

/// Pagination metadata for list responses.
///
/// Cursors are opaque: they are forwarded to callers exactly as upstream
/// returned them and never interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_forwarded_verbatim() {
        let json = r#"{"nextPage":"b2Zmc2V0PTIw=","totalResults":41}"#;
        let pagination: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(pagination.next_page.as_deref(), Some("b2Zmc2V0PTIw="));
        assert_eq!(pagination.prev_page, None);
        assert_eq!(serde_json::to_string(&pagination).unwrap(), json);
    }
}
