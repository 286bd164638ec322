use serde::Serialize;

use crate::domains::emergency_alert::models::EmergencyAlert;

/// Emergency alert as handed to the alert card
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyAlertData {
    #[serde(flatten)]
    pub alert: EmergencyAlert,

    /// Badge text, e.g. "HIGH PRIORITY"
    pub urgency_label: String,
}

impl From<EmergencyAlert> for EmergencyAlertData {
    fn from(alert: EmergencyAlert) -> Self {
        Self {
            urgency_label: alert.urgency.label(),
            alert,
        }
    }
}
