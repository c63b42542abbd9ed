//! Customer profile route handlers.

use axum::extract::{Path, State, rejection::PathRejection};

use commerce_bridge_core::{Address, CustomerId};

use super::params::path_id;
use crate::envelope::Envelope;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Show a customer profile's address.
#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Envelope<Address>> {
    let id = path_id(path, "Customer", CustomerId::parse)?;

    let profile = state
        .squarespace()
        .get_customer_profile(&id)
        .await
        .map_err(|e| AppError::lookup("Customer profile", e))?;

    Ok(Envelope::data(profile))
}
