use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Categorized, Category};
use crate::domains::emergency_alert::fallback::FALLBACK_ALERTS;

/// How urgently a sitter is needed. Only affects display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    /// Badge text, e.g. "HIGH PRIORITY".
    pub fn label(&self) -> String {
        format!("{} PRIORITY", self.as_str().to_uppercase())
    }
}

/// Lifecycle of an emergency request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Fulfilled,
    Cancelled,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Fulfilled => "fulfilled",
            AlertStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emergency alert model - a request for backup pet sitting
///
/// `member_id` points at the posting member but is never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub pet_name: String,
    pub pet_type: String,
    pub location: String,
    pub urgency: Urgency,
    pub description: String,
    pub compensation: String,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    pub status: AlertStatus,
    pub member_id: String,
}

impl EmergencyAlert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}

impl Categorized for EmergencyAlert {
    const CATEGORY: Category = Category::EmergencyAlerts;

    fn fallback() -> &'static [Self] {
        FALLBACK_ALERTS.as_slice()
    }
}

/// Insert body for a new alert. `status` defaults to active remote-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmergencyAlert {
    pub pet_name: String,
    pub pet_type: String,
    pub location: String,
    pub urgency: Urgency,
    pub description: String,
    pub compensation: String,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
    pub member_id: String,
}

/// Patch body for changing an alert's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: AlertStatus,
}
