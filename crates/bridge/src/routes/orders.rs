//! Order route handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;

use commerce_bridge_core::{Order, OrderId};

use super::params::{Window, filter, path_id};
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::squarespace::OrderQuery;
use crate::state::AppState;

/// Raw query parameters for the order listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub status: Option<String>,
    pub customer_id: Option<String>,
}

impl OrderListParams {
    /// Validate the parameters into an upstream query.
    ///
    /// # Errors
    ///
    /// Returns `invalid_parameter` if `limit` or `offset` is not an integer.
    pub fn into_query(self) -> Result<OrderQuery> {
        let window = Window::parse(self.limit.as_deref(), self.offset.as_deref())?;
        Ok(OrderQuery {
            site_id: None,
            limit: window.limit,
            offset: window.offset,
            status: filter(self.status),
            customer_id: filter(self.customer_id),
        })
    }
}

/// Check an order payload before it is sent upstream.
///
/// # Errors
///
/// Returns `validation_error` if the email is blank or there are no line items.
pub fn validate_new_order(order: &Order) -> Result<()> {
    if !order.has_email() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if !order.has_line_items() {
        return Err(AppError::Validation(
            "At least one line item is required".to_string(),
        ));
    }
    Ok(())
}

/// List orders.
#[tracing::instrument(skip(state, params))]
pub async fn index(
    State(state): State<AppState>,
    params: std::result::Result<Query<OrderListParams>, QueryRejection>,
) -> Result<Envelope<Vec<Order>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidParameter(e.body_text()))?;
    let query = params.into_query()?;

    let page = state
        .squarespace()
        .list_orders(&query)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch orders", e))?;

    Ok(page.into())
}

/// Show a single order.
#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Envelope<Order>> {
    let id = path_id(path, "Order", OrderId::parse)?;

    let order = state
        .squarespace()
        .get_order(&id)
        .await
        .map_err(|e| AppError::lookup("Order", e))?;

    Ok(Envelope::data(order))
}

/// Create an order upstream.
#[tracing::instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Order>, JsonRejection>,
) -> Result<(StatusCode, Envelope<Order>)> {
    let Json(order) = payload
        .map_err(|e| AppError::InvalidRequest(format!("Invalid order data: {}", e.body_text())))?;
    validate_new_order(&order)?;

    let created = state
        .squarespace()
        .create_order(&order)
        .await
        .map_err(|source| AppError::Creation {
            context: "Failed to create order".to_string(),
            source,
        })?;

    Ok((StatusCode::CREATED, Envelope::data(created)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use commerce_bridge_core::{Money, OrderLineItem, ProductId};

    use super::*;
    use crate::envelope::ErrorKind;

    fn line_item() -> OrderLineItem {
        OrderLineItem {
            product_id: ProductId::parse("p1").unwrap(),
            variant_id: "v1".to_string(),
            sku: "SKU-1".to_string(),
            product_name: "Print".to_string(),
            variant_name: None,
            quantity: 1,
            unit_price: Money::new("25.00", "USD"),
            total_price: Money::new("25.00", "USD"),
            customizations: Vec::new(),
        }
    }

    #[test]
    fn test_params_into_query() {
        let params = OrderListParams {
            status: Some("PENDING".to_string()),
            customer_id: Some(String::new()),
            offset: Some("0".to_string()),
            ..OrderListParams::default()
        };
        let query = params.into_query().unwrap();
        assert_eq!(query.limit, Some(20));
        assert_eq!(query.offset, None);
        assert_eq!(query.status.as_deref(), Some("PENDING"));
        assert_eq!(query.customer_id, None);
    }

    #[test]
    fn test_order_without_email_is_rejected() {
        let order = Order {
            email: "   ".to_string(),
            line_items: vec![line_item()],
            ..Order::default()
        };
        let err = validate_new_order(&order).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn test_order_without_line_items_is_rejected() {
        let order = Order {
            email: "buyer@example.com".to_string(),
            ..Order::default()
        };
        let err = validate_new_order(&order).unwrap_err();
        assert_eq!(err.to_string(), "At least one line item is required");
    }

    #[test]
    fn test_valid_order_passes() {
        let order = Order {
            email: "buyer@example.com".to_string(),
            line_items: vec![line_item()],
            ..Order::default()
        };
        assert!(validate_new_order(&order).is_ok());
    }
}
