//! Inventory route handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};

use commerce_bridge_core::{ProductId, ProductStock};

use super::params::path_id;
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Body of an inventory update.
#[derive(Debug, Deserialize)]
pub struct InventoryUpdateRequest {
    pub quantity: Option<i64>,
}

/// Confirmation returned after an inventory update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdated {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Show the stock level of a product.
#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Envelope<ProductStock>> {
    let id = path_id(path, "Product", ProductId::parse)?;

    let stock = state
        .squarespace()
        .get_inventory(&id)
        .await
        .map_err(|e| AppError::lookup("Inventory", e))?;

    Ok(Envelope::data(stock))
}

/// Set the stock quantity of a product.
#[tracing::instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    payload: std::result::Result<Json<InventoryUpdateRequest>, JsonRejection>,
) -> Result<Envelope<InventoryUpdated>> {
    let id = path_id(path, "Product", ProductId::parse)?;
    let Json(request) = payload.map_err(|e| {
        AppError::InvalidRequest(format!("Invalid inventory data: {}", e.body_text()))
    })?;
    let quantity = request
        .quantity
        .ok_or_else(|| AppError::Validation("Quantity is required".to_string()))?;

    state
        .squarespace()
        .update_inventory(&id, quantity)
        .await
        .map_err(|e| AppError::upstream("Failed to update inventory", e))?;

    Ok(Envelope::data(InventoryUpdated {
        product_id: id,
        quantity,
    }))
}
