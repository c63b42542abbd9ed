//! Order types.
//!
//! Server-assigned fields (`id`, `orderNumber`, `totals`, `systemData`) are
//! optional so an order being submitted for creation decodes without them.

use serde::{Deserialize, Serialize};

use super::{CustomerId, Money, OrderId, ProductId, SystemData};

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Assigned by upstream on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    /// Human-facing order number, assigned by upstream on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Contact email. Empty when the caller omitted it.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub billing_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Ordered line items.
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    /// Computed by upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<OrderTotals>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub fulfillments: Vec<OrderFulfillment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
}

impl Order {
    /// Returns true when the order carries a non-blank contact email.
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Returns true when the order has at least one line item.
    #[must_use]
    pub const fn has_line_items(&self) -> bool {
        !self.line_items.is_empty()
    }
}

/// A single line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(default)]
    pub product_id: ProductId,
    #[serde(default)]
    pub variant_id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: Money,
    #[serde(default)]
    pub total_price: Money,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customizations: Vec<OrderCustomization>,
}

/// A custom form answer captured on a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomization {
    #[serde(default)]
    pub field_name: String,
    #[serde(default)]
    pub value: String,
}

/// Order money totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub tax: Money,
    #[serde(default)]
    pub shipping: Money,
    #[serde(default)]
    pub discount: Money,
    #[serde(default)]
    pub total: Money,
}

/// A shipment or delivery against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFulfillment {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub fulfillment_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_info: Option<TrackingInfo>,
    /// IDs of the line items covered by this fulfillment.
    #[serde(default)]
    pub line_items: Vec<String>,
}

/// Carrier tracking details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
}

/// Structured mailing address.
///
/// Also returned as the body of a customer profile lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_without_server_fields() {
        let order: Order = serde_json::from_str(
            r#"{
                "email": "buyer@example.com",
                "billingAddress": {"firstName": "Ada", "lastName": "Lovelace", "addressLine1": "1 Main St", "city": "London", "postalCode": "N1", "country": "GB"},
                "lineItems": [{"productId": "prod-1", "variantId": "var-1", "sku": "SQ-001", "productName": "Shirt", "quantity": 2,
                               "unitPrice": {"value": "10.00", "currency": "USD"}, "totalPrice": {"value": "20.00", "currency": "USD"}}]
            }"#,
        )
        .unwrap();

        assert!(order.id.is_none());
        assert!(order.totals.is_none());
        assert!(order.has_email());
        assert!(order.has_line_items());

        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("orderNumber").is_none());
        assert!(value.get("totals").is_none());
        assert_eq!(value["billingAddress"]["addressLine1"], "1 Main St");
    }

    #[test]
    fn test_missing_required_fields_decode_as_empty() {
        let order: Order = serde_json::from_str("{}").unwrap();
        assert!(!order.has_email());
        assert!(!order.has_line_items());
    }

    #[test]
    fn test_blank_email_is_missing() {
        let order = Order {
            email: "   ".to_string(),
            ..Order::default()
        };
        assert!(!order.has_email());
    }

    #[test]
    fn test_sparse_line_item_decodes() {
        let order: Order =
            serde_json::from_str(r#"{"lineItems": [{"sku": "X"}, {"productId": "p2", "quantity": -1}]}"#)
                .unwrap();
        let first = order.line_items.first().unwrap();
        assert_eq!(first.sku, "X");
        assert_eq!(first.quantity, 0);
        assert_eq!(first.product_id.as_str(), "");
        assert_eq!(order.line_items.get(1).unwrap().quantity, -1);
    }

    #[test]
    fn test_fulfillment_tracking() {
        let fulfillment: OrderFulfillment = serde_json::from_str(
            r#"{"id": "f-1", "type": "SHIPPED", "status": "COMPLETE",
                "trackingInfo": {"carrier": "UPS", "trackingNumber": "1Z999"}, "lineItems": ["li-1"]}"#,
        )
        .unwrap();
        let tracking = fulfillment.tracking_info.unwrap();
        assert_eq!(tracking.carrier, "UPS");
        assert!(tracking.tracking_url.is_none());
    }
}
