//! Emergency alert domain - urgent requests for backup sitters

pub mod actions;
pub mod data;
pub mod fallback;
pub mod models;

pub use data::EmergencyAlertData;
pub use fallback::FALLBACK_ALERTS;
pub use models::{AlertStatus, EmergencyAlert, NewEmergencyAlert, Urgency};
