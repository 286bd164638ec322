//! Emergency alert actions

mod create_alert;
mod update_status;

pub use create_alert::create_emergency_alert;
pub use update_status::update_alert_status;

use crate::common::Resolved;
use crate::domains::emergency_alert::data::EmergencyAlertData;
use crate::kernel::ServerDeps;

/// Resolved alert cards: live alerts, the fallback alert, or loading.
pub fn list_emergency_alerts(deps: &ServerDeps) -> Resolved<EmergencyAlertData> {
    deps.queries.emergency_alerts().map(EmergencyAlertData::from)
}
