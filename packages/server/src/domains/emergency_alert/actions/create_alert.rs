//! Create emergency alert action

use anyhow::{Context, Result};
use tracing::info;

use crate::domains::emergency_alert::models::{EmergencyAlert, NewEmergencyAlert};
use crate::kernel::ServerDeps;

/// Post a new emergency request and refresh the active alert list.
pub async fn create_emergency_alert(
    alert: NewEmergencyAlert,
    deps: &ServerDeps,
) -> Result<EmergencyAlert> {
    info!(
        pet_name = %alert.pet_name,
        urgency = alert.urgency.as_str(),
        member_id = %alert.member_id,
        "Creating emergency alert"
    );

    let created = deps
        .store
        .create_alert(&alert)
        .await
        .context("Failed to create emergency alert")?;
    info!(alert_id = %created.id, "Emergency alert created");

    deps.queries.invalidate_emergency_alerts().await;

    Ok(created)
}
