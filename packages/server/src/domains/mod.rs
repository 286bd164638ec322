// Business domains
pub mod emergency_alert;
pub mod landing;
pub mod member;
pub mod pricing;
