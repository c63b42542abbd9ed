//! Product commands.

use commerce_bridge::{Envelope, ProductQuery};
use commerce_bridge_core::ProductId;

use super::{CommandError, Context, print_json};

/// List one page of products, with the upstream pagination cursors.
///
/// # Errors
///
/// Returns an error if the upstream call fails.
pub async fn list(ctx: &Context, query: &ProductQuery) -> Result<(), CommandError> {
    let page = ctx.client.list_products(query).await?;
    tracing::info!(count = page.items.len(), "Fetched products");
    print_json(&Envelope::from(page))
}

/// Show a single product.
///
/// # Errors
///
/// Returns an error if the ID is blank or the upstream call fails.
pub async fn get(ctx: &Context, id: &str) -> Result<(), CommandError> {
    let id = ProductId::parse(id)?;
    print_json(&ctx.client.get_product(&id).await?)
}

/// Show the variants of a product.
///
/// # Errors
///
/// Returns an error if the ID is blank or the upstream call fails.
pub async fn variants(ctx: &Context, id: &str) -> Result<(), CommandError> {
    let id = ProductId::parse(id)?;
    print_json(&ctx.client.get_product_variants(&id).await?)
}
