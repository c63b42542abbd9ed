//! Customer profile commands.

use commerce_bridge_core::CustomerId;

use super::{CommandError, Context, print_json};

/// Show a customer profile's address.
///
/// # Errors
///
/// Returns an error if the ID is blank or the upstream call fails.
pub async fn get(ctx: &Context, id: &str) -> Result<(), CommandError> {
    let id = CustomerId::parse(id)?;
    print_json(&ctx.client.get_customer_profile(&id).await?)
}
