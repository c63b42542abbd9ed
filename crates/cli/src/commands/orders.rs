//! Order commands.

use commerce_bridge::{Envelope, OrderQuery};
use commerce_bridge_core::OrderId;

use super::{CommandError, Context, print_json};

/// List one page of orders, with the upstream pagination cursors.
///
/// # Errors
///
/// Returns an error if the upstream call fails.
pub async fn list(ctx: &Context, query: &OrderQuery) -> Result<(), CommandError> {
    let page = ctx.client.list_orders(query).await?;
    tracing::info!(count = page.items.len(), "Fetched orders");
    print_json(&Envelope::from(page))
}

/// Show a single order.
///
/// # Errors
///
/// Returns an error if the ID is blank or the upstream call fails.
pub async fn get(ctx: &Context, id: &str) -> Result<(), CommandError> {
    let id = OrderId::parse(id)?;
    print_json(&ctx.client.get_order(&id).await?)
}
