//! Global setup run once before the live scenarios.

use aex_client::{ApiClient, HealthStatus};

use crate::error::SuiteError;
use crate::telemetry;

/// Build a client from the environment after installing logging.
pub fn client_from_env() -> Result<ApiClient, SuiteError> {
    telemetry::init();
    Ok(ApiClient::from_env()?)
}

/// Log the target and probe it.
///
/// A failed probe is logged, not returned: the scenarios report their own
/// transport errors.
pub async fn global_setup(client: &ApiClient) -> HealthStatus {
    telemetry::init();
    tracing::info!(base_url = %client.config().base_url, "starting API test setup");

    let health = client.health_check().await;
    match &health {
        HealthStatus::Healthy => tracing::info!("API is accessible"),
        HealthStatus::Degraded(status) => tracing::warn!(status, "API health check failed"),
        HealthStatus::Unreachable(reason) => {
            tracing::warn!(%reason, "could not perform API health check")
        }
    }

    tracing::info!("global setup completed");
    health
}
