// TestDependencies - mock implementations for testing
//
// Provides an in-memory directory store that can be injected into ServerDeps.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use supabase_client::SupabaseError;

use super::{BaseDirectoryStore, ServerDeps};
use crate::common::Category;
use crate::domains::emergency_alert::models::{AlertStatus, EmergencyAlert, NewEmergencyAlert};
use crate::domains::member::models::Member;
use crate::domains::pricing::models::PricingPlan;

// =============================================================================
// Mock Directory Store
// =============================================================================

/// A call made against the mock store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ListMembers,
    FindMember(String),
    UpdateMemberAvailability(String, bool),
    ListActiveAlerts,
    CreateAlert(String),
    UpdateAlertStatus(String, AlertStatus),
    ListPricingPlans,
}

#[derive(Default)]
struct MockState {
    members: Vec<Member>,
    alerts: Vec<EmergencyAlert>,
    plans: Vec<PricingPlan>,
    failing_reads: HashSet<Category>,
    failing_writes: bool,
    unconfigured: bool,
    calls: Vec<StoreCall>,
    next_id: u64,
}

/// In-memory store behaving like the hosted data service.
///
/// Alert reads only return active alerts; rows come back in stored order.
#[derive(Clone, Default)]
pub struct MockDirectoryStore {
    state: Arc<Mutex<MockState>>,
}

impl MockDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(self, members: Vec<Member>) -> Self {
        self.state.lock().unwrap().members = members;
        self
    }

    pub fn with_alerts(self, alerts: Vec<EmergencyAlert>) -> Self {
        self.state.lock().unwrap().alerts = alerts;
        self
    }

    pub fn with_plans(self, plans: Vec<PricingPlan>) -> Self {
        self.state.lock().unwrap().plans = plans;
        self
    }

    /// Report the data service as (un)configured, as seen by `/health`
    pub fn with_configured(self, configured: bool) -> Self {
        self.state.lock().unwrap().unconfigured = !configured;
        self
    }

    /// Replace the stored members after construction
    pub fn set_members(&self, members: Vec<Member>) {
        self.state.lock().unwrap().members = members;
    }

    /// Make reads for `category` fail until `recover_reads` is called
    pub fn fail_reads(&self, category: Category) {
        self.state.lock().unwrap().failing_reads.insert(category);
    }

    pub fn recover_reads(&self, category: Category) {
        self.state.lock().unwrap().failing_reads.remove(&category);
    }

    /// Make every write fail
    pub fn fail_writes(&self) {
        self.state.lock().unwrap().failing_writes = true;
    }

    /// Get all calls made so far
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Count calls matching `f`
    pub fn count_calls(&self, f: impl Fn(&StoreCall) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| f(c)).count()
    }

    fn record(&self, call: StoreCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn check_read(&self, category: Category) -> Result<()> {
        if self.state.lock().unwrap().failing_reads.contains(&category) {
            return Err(anyhow!("mock {} read failed", category));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.state.lock().unwrap().failing_writes {
            return Err(SupabaseError::Api {
                status: 503,
                message: "mock write failed".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl BaseDirectoryStore for MockDirectoryStore {
    async fn list_members(&self) -> Result<Vec<Member>> {
        self.record(StoreCall::ListMembers);
        self.check_read(Category::Members)?;
        Ok(self.state.lock().unwrap().members.clone())
    }

    async fn find_member(&self, id: &str) -> Result<Option<Member>> {
        self.record(StoreCall::FindMember(id.to_string()));
        self.check_read(Category::Members)?;
        let state = self.state.lock().unwrap();
        Ok(state.members.iter().find(|m| m.id == id).cloned())
    }

    async fn update_member_availability(&self, id: &str, available: bool) -> Result<Member> {
        self.record(StoreCall::UpdateMemberAvailability(id.to_string(), available));
        self.check_write()?;
        let mut state = self.state.lock().unwrap();
        let member = state
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| SupabaseError::NotFound {
                table: "members".to_string(),
            })?;
        member.available = available;
        Ok(member.clone())
    }

    async fn list_active_alerts(&self) -> Result<Vec<EmergencyAlert>> {
        self.record(StoreCall::ListActiveAlerts);
        self.check_read(Category::EmergencyAlerts)?;
        let state = self.state.lock().unwrap();
        Ok(state.alerts.iter().filter(|a| a.is_active()).cloned().collect())
    }

    async fn create_alert(&self, alert: &NewEmergencyAlert) -> Result<EmergencyAlert> {
        self.record(StoreCall::CreateAlert(alert.pet_name.clone()));
        self.check_write()?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let created = EmergencyAlert {
            id: format!("mock-{}", state.next_id),
            created_at: Utc::now(),
            pet_name: alert.pet_name.clone(),
            pet_type: alert.pet_type.clone(),
            location: alert.location.clone(),
            urgency: alert.urgency,
            description: alert.description.clone(),
            compensation: alert.compensation.clone(),
            contact_name: alert.contact_name.clone(),
            contact_email: alert.contact_email.clone(),
            contact_phone: alert.contact_phone.clone(),
            status: alert.status.unwrap_or(AlertStatus::Active),
            member_id: alert.member_id.clone(),
        };
        // Newest first, like the remote ordering
        state.alerts.insert(0, created.clone());
        Ok(created)
    }

    async fn update_alert_status(&self, id: &str, status: AlertStatus) -> Result<EmergencyAlert> {
        self.record(StoreCall::UpdateAlertStatus(id.to_string(), status));
        self.check_write()?;
        let mut state = self.state.lock().unwrap();
        let alert = state
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SupabaseError::NotFound {
                table: "emergency_alerts".to_string(),
            })?;
        alert.status = status;
        Ok(alert.clone())
    }

    async fn list_pricing_plans(&self) -> Result<Vec<PricingPlan>> {
        self.record(StoreCall::ListPricingPlans);
        self.check_read(Category::PricingPlans)?;
        Ok(self.state.lock().unwrap().plans.clone())
    }

    fn is_configured(&self) -> bool {
        !self.state.lock().unwrap().unconfigured
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// ServerDeps wired to a mock store, with the store kept for assertions
pub struct TestDependencies {
    pub store: MockDirectoryStore,
    pub deps: ServerDeps,
}

impl TestDependencies {
    /// Stale time long enough that reads never trigger a background refresh
    pub fn new(store: MockDirectoryStore) -> Self {
        Self::with_stale_after(store, Duration::from_secs(3600))
    }

    pub fn with_stale_after(store: MockDirectoryStore, stale_after: Duration) -> Self {
        let deps = ServerDeps::new(Arc::new(store.clone()), stale_after);
        Self { store, deps }
    }
}
