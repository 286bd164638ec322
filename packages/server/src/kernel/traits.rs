// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Resolution and fallback selection live in common::resolution.
//
// Naming convention: Base* for trait names (e.g., BaseDirectoryStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::emergency_alert::models::{AlertStatus, EmergencyAlert, NewEmergencyAlert};
use crate::domains::member::models::Member;
use crate::domains::pricing::models::PricingPlan;

// =============================================================================
// Directory Store Trait (Infrastructure - hosted data service)
// =============================================================================

#[async_trait]
pub trait BaseDirectoryStore: Send + Sync {
    /// All members, newest first
    async fn list_members(&self) -> Result<Vec<Member>>;

    /// A single member, if the id exists
    async fn find_member(&self, id: &str) -> Result<Option<Member>>;

    /// Set `available` on a member and return the updated row
    async fn update_member_availability(&self, id: &str, available: bool) -> Result<Member>;

    /// Active alerts, newest first
    async fn list_active_alerts(&self) -> Result<Vec<EmergencyAlert>>;

    /// Insert an alert and return the stored row
    async fn create_alert(&self, alert: &NewEmergencyAlert) -> Result<EmergencyAlert>;

    /// Set an alert's status and return the updated row
    async fn update_alert_status(&self, id: &str, status: AlertStatus) -> Result<EmergencyAlert>;

    /// Pricing plans, cheapest first
    async fn list_pricing_plans(&self) -> Result<Vec<PricingPlan>>;

    /// Whether reads can return live data at all
    fn is_configured(&self) -> bool {
        true
    }
}
