//! Health route handler.
//!
//! The report is recomputed on every request from the configuration and a
//! live upstream probe. A degraded service still answers 200.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;

use commerce_bridge_core::{CheckStatus, HealthStatus};

use crate::config::SquarespaceConfig;
use crate::envelope::Envelope;
use crate::squarespace::SquarespaceClient;
use crate::state::AppState;

/// Key of the configuration check in the report.
pub const CONFIGURATION_CHECK: &str = "configuration";

/// Key of the upstream probe in the report.
pub const SQUARESPACE_CHECK: &str = "squarespace_api";

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthCheck {
    const fn healthy() -> Self {
        Self {
            status: CheckStatus::Healthy,
            message: None,
            latency_ms: None,
        }
    }

    fn with_message(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            latency_ms: None,
        }
    }
}

/// Aggregated health report.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub checks: BTreeMap<&'static str, HealthCheck>,
}

/// Check that credentials and a site are configured.
#[must_use]
pub fn configuration_check(config: &SquarespaceConfig) -> HealthCheck {
    if !config.has_credentials() {
        HealthCheck::with_message(
            CheckStatus::Error,
            "No Squarespace authentication configured",
        )
    } else if config.site_id.is_none() {
        HealthCheck::with_message(CheckStatus::Warning, "SQUARESPACE_SITE_ID not configured")
    } else {
        HealthCheck::healthy()
    }
}

/// Combine the two checks into an overall status.
///
/// A configuration error wins over everything; a failed probe or a
/// configuration warning only degrades.
#[must_use]
pub fn overall_status(configuration: CheckStatus, upstream: CheckStatus) -> HealthStatus {
    if configuration == CheckStatus::Error {
        HealthStatus::Unhealthy
    } else if upstream == CheckStatus::Unhealthy || configuration == CheckStatus::Warning {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    }
}

/// HTTP status for an overall health status.
#[must_use]
pub const fn http_status(status: HealthStatus) -> StatusCode {
    match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Run both checks and build a report.
pub async fn build_report(config: &SquarespaceConfig, client: &SquarespaceClient) -> HealthReport {
    let started = Instant::now();
    let upstream = match client.health_check().await {
        Ok(()) => HealthCheck {
            latency_ms: Some(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)),
            ..HealthCheck::healthy()
        },
        Err(e) => {
            tracing::warn!(error = %e, "Squarespace health probe failed");
            HealthCheck::with_message(CheckStatus::Unhealthy, e.to_string())
        }
    };
    let configuration = configuration_check(config);

    HealthReport {
        status: overall_status(configuration.status, upstream.status),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        checks: BTreeMap::from([
            (CONFIGURATION_CHECK, configuration),
            (SQUARESPACE_CHECK, upstream),
        ]),
    }
}

/// Report service health.
#[tracing::instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Envelope<HealthReport>) {
    let report = build_report(&state.config().squarespace, state.squarespace()).await;
    (http_status(report.status), Envelope::data(report))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use url::Url;

    use super::*;

    fn config(token: Option<&str>, site: Option<&str>) -> SquarespaceConfig {
        let mut config = SquarespaceConfig::new(Url::parse("https://api.squarespace.com").unwrap());
        config.access_token = token.map(SecretString::from);
        config.site_id = site.map(String::from);
        config
    }

    #[test]
    fn test_missing_credentials_is_error() {
        let check = configuration_check(&config(None, Some("site-1")));
        assert_eq!(check.status, CheckStatus::Error);
        assert_eq!(
            check.message.as_deref(),
            Some("No Squarespace authentication configured")
        );
    }

    #[test]
    fn test_missing_site_is_warning() {
        let check = configuration_check(&config(Some("token"), None));
        assert_eq!(check.status, CheckStatus::Warning);
        assert_eq!(
            check.message.as_deref(),
            Some("SQUARESPACE_SITE_ID not configured")
        );
    }

    #[test]
    fn test_full_configuration_is_healthy() {
        let check = configuration_check(&config(Some("token"), Some("site-1")));
        assert_eq!(check, HealthCheck::healthy());
    }

    #[test]
    fn test_overall_precedence() {
        assert_eq!(
            overall_status(CheckStatus::Error, CheckStatus::Healthy),
            HealthStatus::Unhealthy
        );
        assert_eq!(
            overall_status(CheckStatus::Error, CheckStatus::Unhealthy),
            HealthStatus::Unhealthy
        );
        assert_eq!(
            overall_status(CheckStatus::Healthy, CheckStatus::Unhealthy),
            HealthStatus::Degraded
        );
        assert_eq!(
            overall_status(CheckStatus::Warning, CheckStatus::Healthy),
            HealthStatus::Degraded
        );
        assert_eq!(
            overall_status(CheckStatus::Healthy, CheckStatus::Healthy),
            HealthStatus::Healthy
        );
    }

    #[test]
    fn test_degraded_still_answers_ok() {
        assert_eq!(http_status(HealthStatus::Degraded), StatusCode::OK);
        assert_eq!(
            http_status(HealthStatus::Unhealthy),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_check_serialization_omits_empty_fields() {
        let value = serde_json::to_value(HealthCheck::healthy()).unwrap();
        assert_eq!(value, serde_json::json!({"status": "healthy"}));
    }
}
