//! Product catalog types.
//!
//! Pass-through representations of Squarespace Commerce products. The bridge
//! never mutates these; it only decodes and re-encodes them.

use serde::{Deserialize, Serialize};

use super::{Money, ProductId, VariantId};

// =============================================================================
// Product
// =============================================================================

/// A catalog product with its purchasable variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Squarespace product ID.
    #[serde(default)]
    pub id: ProductId,
    /// Product type (e.g. `PHYSICAL`, `DIGITAL`, `SERVICE`).
    #[serde(rename = "type", default)]
    pub product_type: String,
    /// Default variant ID.
    #[serde(default)]
    pub variant_id: String,
    /// Custom checkout form attached to the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_form: Option<CustomForm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Purchasable variants. Upstream calls this field `products`.
    #[serde(rename = "products", default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_products: Vec<RelatedProduct>,
    /// SEO metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_data: Option<SeoData>,
    /// Creation/modification/publish timestamps.
    #[serde(default)]
    pub system_data: SystemData,
}

/// A single purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default)]
    pub id: VariantId,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub pricing: ProductPricing,
    #[serde(default)]
    pub stock: ProductStock,
    #[serde(default)]
    pub visibility: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ProductAttribute>,
    /// Option selections that distinguish this variant (size, colour...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantOption>,
}

/// Product image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub mime_type: String,
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
}

/// Variant pricing. Every price is optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,
    #[serde(default)]
    pub on_sale: bool,
}

/// Stock tracking state for a variant.
///
/// This is also the payload of the inventory endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStock {
    #[serde(default)]
    pub track_inventory: bool,
    /// On-hand quantity; absent when inventory is not tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub allow_backorder: bool,
    #[serde(default)]
    pub unlimited: bool,
}

/// Free-form name/value attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// A chosen option on a variant (e.g. `Size` = `Large`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub option: String,
}

/// Reference to another product shown as related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProduct {
    #[serde(default)]
    pub product_id: ProductId,
    #[serde(default)]
    pub variant_id: String,
}

// =============================================================================
// Metadata
// =============================================================================

/// SEO metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Lifecycle timestamps in Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemData {
    #[serde(default)]
    pub created_on: i64,
    #[serde(default)]
    pub modified_on: i64,
    #[serde(default)]
    pub published_on: i64,
}

/// Custom form collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomForm {
    #[serde(default)]
    pub form_id: String,
    #[serde(default)]
    pub fields: Vec<CustomFormField>,
}

/// A single field on a custom form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFormField {
    #[serde(default)]
    pub field_id: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

/// Validation constraints on a custom form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": "prod-1",
        "type": "PHYSICAL",
        "variantId": "var-1",
        "tags": ["summer"],
        "products": [
            {
                "id": "var-1",
                "sku": "SQ-001",
                "name": "Linen Shirt",
                "images": [],
                "pricing": {
                    "basePrice": {"value": "49.00", "currency": "USD"},
                    "onSale": false
                },
                "stock": {"trackInventory": true, "quantity": 7, "allowBackorder": false, "unlimited": false},
                "visibility": "VISIBLE"
            }
        ],
        "seoData": {"slug": "linen-shirt"},
        "systemData": {"createdOn": 1700000000000, "modifiedOn": 1700000500000, "publishedOn": 1700000100000}
    }"#;

    #[test]
    fn test_decode_product() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id.as_str(), "prod-1");
        assert_eq!(product.product_type, "PHYSICAL");
        assert_eq!(product.variants.len(), 1);
        let variant = product.variants.first().unwrap();
        assert_eq!(variant.sku, "SQ-001");
        assert_eq!(variant.stock.quantity, Some(7));
        assert_eq!(
            variant.pricing.base_price,
            Some(Money::new("49.00", "USD"))
        );
        assert_eq!(product.system_data.published_on, 1_700_000_100_000);
    }

    #[test]
    fn test_variants_serialize_as_products() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("products").is_some());
        assert!(value.get("variants").is_none());
        assert!(value.get("customForm").is_none());
    }

    #[test]
    fn test_sparse_product_decodes() {
        let product: Product = serde_json::from_str(
            r#"{"products": [{"sku": "SQ-002", "images": [{"mimeType": "image/png"}]}]}"#,
        )
        .unwrap();
        assert_eq!(product.id.as_str(), "");
        assert_eq!(product.product_type, "");
        let variant = product.variants.first().unwrap();
        assert_eq!(variant.id.as_str(), "");
        assert_eq!(variant.images.first().unwrap().url, "");
    }

    #[test]
    fn test_stock_without_quantity() {
        let stock: ProductStock =
            serde_json::from_str(r#"{"trackInventory": false, "unlimited": true}"#).unwrap();
        assert_eq!(stock.quantity, None);
        assert!(stock.unlimited);
        let json = serde_json::to_string(&stock).unwrap();
        assert!(!json.contains("quantity"));
    }
}
