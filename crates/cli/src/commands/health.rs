//! Health probe command.

use commerce_bridge::routes::health::build_report;
use commerce_bridge_core::HealthStatus;

use super::{CommandError, Context, print_json};

/// Print the same health report the server's `/health` route returns.
///
/// An unhealthy report is printed, then logged as an error.
///
/// # Errors
///
/// Returns an error if the report cannot be printed.
pub async fn run(ctx: &Context) -> Result<(), CommandError> {
    let report = build_report(&ctx.config.squarespace, &ctx.client).await;
    print_json(&report)?;

    if report.status == HealthStatus::Unhealthy {
        tracing::error!(status = %report.status, "Bridge is not operational");
    }
    Ok(())
}
