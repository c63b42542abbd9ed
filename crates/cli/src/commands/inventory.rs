//! Inventory commands.

use commerce_bridge_core::ProductId;
use serde_json::json;

use super::{CommandError, Context, print_json};

/// Show a product's stock level.
///
/// # Errors
///
/// Returns an error if the ID is blank or the upstream call fails.
pub async fn get(ctx: &Context, id: &str) -> Result<(), CommandError> {
    let id = ProductId::parse(id)?;
    print_json(&ctx.client.get_inventory(&id).await?)
}

/// Set a product's stock quantity.
///
/// # Errors
///
/// Returns an error if the ID is blank or upstream rejects the update.
pub async fn set(ctx: &Context, id: &str, quantity: i64) -> Result<(), CommandError> {
    let id = ProductId::parse(id)?;
    ctx.client.update_inventory(&id, quantity).await?;
    print_json(&json!({ "productId": id, "quantity": quantity }))
}
