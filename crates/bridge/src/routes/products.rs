//! Product route handlers.

use axum::extract::{
    Path, Query, State,
    rejection::{PathRejection, QueryRejection},
};
use serde::Deserialize;

use commerce_bridge_core::{Product, ProductId, ProductVariant};

use super::params::{Window, filter, path_id};
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::squarespace::ProductQuery;
use crate::state::AppState;

/// Raw query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

impl ProductListParams {
    /// Validate the parameters into an upstream query.
    ///
    /// # Errors
    ///
    /// Returns `invalid_parameter` if `limit` or `offset` is not an integer.
    pub fn into_query(self) -> Result<ProductQuery> {
        let window = Window::parse(self.limit.as_deref(), self.offset.as_deref())?;
        Ok(ProductQuery {
            site_id: None,
            limit: window.limit,
            offset: window.offset,
            category: filter(self.category),
            tag: filter(self.tag),
        })
    }
}

/// List products.
#[tracing::instrument(skip(state, params))]
pub async fn index(
    State(state): State<AppState>,
    params: std::result::Result<Query<ProductListParams>, QueryRejection>,
) -> Result<Envelope<Vec<Product>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidParameter(e.body_text()))?;
    let query = params.into_query()?;

    let page = state
        .squarespace()
        .list_products(&query)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch products", e))?;

    Ok(page.into())
}

/// Show a single product.
#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Envelope<Product>> {
    let id = path_id(path, "Product", ProductId::parse)?;

    let product = state
        .squarespace()
        .get_product(&id)
        .await
        .map_err(|e| AppError::lookup("Product", e))?;

    Ok(Envelope::data(product))
}

/// List the variants of a product.
#[tracing::instrument(skip(state))]
pub async fn variants(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Envelope<Vec<ProductVariant>>> {
    let id = path_id(path, "Product", ProductId::parse)?;

    let variants = state
        .squarespace()
        .get_product_variants(&id)
        .await
        .map_err(|e| AppError::lookup("Product variants", e))?;

    Ok(Envelope::data(variants))
}
