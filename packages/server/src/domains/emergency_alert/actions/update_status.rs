//! Update emergency alert status action

use anyhow::{Context, Result};
use tracing::info;

use crate::domains::emergency_alert::models::{AlertStatus, EmergencyAlert};
use crate::kernel::ServerDeps;

/// Move an alert to `status` and refresh the active alert list.
///
/// Fulfilled and cancelled alerts drop out of the next remote read, which
/// only returns active alerts.
pub async fn update_alert_status(
    alert_id: &str,
    status: AlertStatus,
    deps: &ServerDeps,
) -> Result<EmergencyAlert> {
    info!(alert_id, status = status.as_str(), "Updating emergency alert status");

    let updated = deps
        .store
        .update_alert_status(alert_id, status)
        .await
        .with_context(|| format!("Failed to set alert {} to {}", alert_id, status))?;

    deps.queries.invalidate_emergency_alerts().await;

    Ok(updated)
}
