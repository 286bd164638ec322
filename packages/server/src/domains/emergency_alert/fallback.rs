//! Static emergency alert shown when no live alerts are available.

use chrono::DateTime;
use lazy_static::lazy_static;

use crate::domains::emergency_alert::models::{AlertStatus, EmergencyAlert, Urgency};

lazy_static! {
    pub static ref FALLBACK_ALERTS: Vec<EmergencyAlert> = vec![EmergencyAlert {
        id: "1".to_string(),
        created_at: DateTime::from_timestamp_millis(1_757_586_406_667).unwrap_or_default(),
        pet_name: "Buddy".to_string(),
        pet_type: "Golden Retriever".to_string(),
        location: "Auckland Central".to_string(),
        urgency: Urgency::High,
        description: "My regular sitter had a family emergency. Buddy needs walking and feeding tonight and tomorrow morning.".to_string(),
        compensation: "$80/day".to_string(),
        contact_name: "Sarah M.".to_string(),
        contact_email: "sarah@example.com".to_string(),
        contact_phone: None,
        status: AlertStatus::Active,
        member_id: "1".to_string(),
    }];
}
