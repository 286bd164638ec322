//! Server dependencies (using traits for testability)
//!
//! The composition root builds one `ServerDeps` and hands it to every route.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use supabase_client::{Direction, SupabaseClient};

use crate::domains::emergency_alert::models::{
    AlertStatus, EmergencyAlert, NewEmergencyAlert, StatusUpdate,
};
use crate::domains::member::models::{AvailabilityUpdate, Member};
use crate::domains::pricing::models::PricingPlan;
use crate::kernel::{BaseDirectoryStore, DirectoryQueries};

// =============================================================================
// SupabaseClient Adapter (implements BaseDirectoryStore trait)
// =============================================================================

/// Wrapper around SupabaseClient that implements BaseDirectoryStore
pub struct SupabaseStore(pub SupabaseClient);

impl SupabaseStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseDirectoryStore for SupabaseStore {
    async fn list_members(&self) -> Result<Vec<Member>> {
        Ok(self
            .0
            .from("members")
            .order("created_at", Direction::Descending)
            .select()
            .await?)
    }

    async fn find_member(&self, id: &str) -> Result<Option<Member>> {
        Ok(self.0.from("members").eq("id", id).maybe_single().await?)
    }

    async fn update_member_availability(&self, id: &str, available: bool) -> Result<Member> {
        Ok(self
            .0
            .from("members")
            .eq("id", id)
            .update(&AvailabilityUpdate { available })
            .await?)
    }

    async fn list_active_alerts(&self) -> Result<Vec<EmergencyAlert>> {
        Ok(self
            .0
            .from("emergency_alerts")
            .eq("status", AlertStatus::Active)
            .order("created_at", Direction::Descending)
            .select()
            .await?)
    }

    async fn create_alert(&self, alert: &NewEmergencyAlert) -> Result<EmergencyAlert> {
        Ok(self.0.from("emergency_alerts").insert(alert).await?)
    }

    async fn update_alert_status(&self, id: &str, status: AlertStatus) -> Result<EmergencyAlert> {
        Ok(self
            .0
            .from("emergency_alerts")
            .eq("id", id)
            .update(&StatusUpdate { status })
            .await?)
    }

    async fn list_pricing_plans(&self) -> Result<Vec<PricingPlan>> {
        Ok(self
            .0
            .from("pricing_plans")
            .order("price", Direction::Ascending)
            .select()
            .await?)
    }

    fn is_configured(&self) -> bool {
        self.0.is_configured()
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies shared by every route (cheap to clone)
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseDirectoryStore>,
    pub queries: Arc<DirectoryQueries>,
}

impl ServerDeps {
    pub fn new(store: Arc<dyn BaseDirectoryStore>, stale_after: Duration) -> Self {
        let queries = Arc::new(DirectoryQueries::new(store.clone(), stale_after));
        Self { store, queries }
    }
}
