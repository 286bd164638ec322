pub mod emergency_alert;

pub use emergency_alert::{AlertStatus, EmergencyAlert, NewEmergencyAlert, StatusUpdate, Urgency};
