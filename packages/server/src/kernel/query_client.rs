//! DirectoryQueries - the three category queries behind the directory
//!
//! Owns the injected store and one `Query<T>` per category. Reads resolve
//! the current snapshot; writes elsewhere call `invalidate_*` to re-fetch.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::common::{resolve_category, Availability, Category, FetchState, Resolved};
use crate::domains::emergency_alert::models::EmergencyAlert;
use crate::domains::member::models::Member;
use crate::domains::pricing::models::PricingPlan;
use crate::kernel::query::Query;
use crate::kernel::BaseDirectoryStore;

pub struct DirectoryQueries {
    store: Arc<dyn BaseDirectoryStore>,
    members: Query<Member>,
    alerts: Query<EmergencyAlert>,
    plans: Query<PricingPlan>,
    stale_after: Duration,
}

impl DirectoryQueries {
    pub fn new(store: Arc<dyn BaseDirectoryStore>, stale_after: Duration) -> Self {
        Self {
            store,
            members: Query::new(Category::Members),
            alerts: Query::new(Category::EmergencyAlerts),
            plans: Query::new(Category::PricingPlans),
            stale_after,
        }
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetch all three categories concurrently.
    pub async fn fetch_all(&self) {
        tokio::join!(
            self.fetch_members(),
            self.fetch_emergency_alerts(),
            self.fetch_pricing_plans()
        );
    }

    pub async fn fetch_members(&self) {
        let store = self.store.clone();
        self.members
            .fetch(|| async move { store.list_members().await.context("Failed to fetch members") })
            .await;
    }

    pub async fn fetch_emergency_alerts(&self) {
        let store = self.store.clone();
        self.alerts
            .fetch(|| async move {
                store
                    .list_active_alerts()
                    .await
                    .context("Failed to fetch emergency alerts")
            })
            .await;
    }

    pub async fn fetch_pricing_plans(&self) {
        let store = self.store.clone();
        self.plans
            .fetch(|| async move {
                store
                    .list_pricing_plans()
                    .await
                    .context("Failed to fetch pricing plans")
            })
            .await;
    }

    pub async fn invalidate_members(&self) {
        debug!(category = %Category::Members, "Invalidating");
        self.fetch_members().await;
    }

    pub async fn invalidate_emergency_alerts(&self) {
        debug!(category = %Category::EmergencyAlerts, "Invalidating");
        self.fetch_emergency_alerts().await;
    }

    pub async fn invalidate_pricing_plans(&self) {
        debug!(category = %Category::PricingPlans, "Invalidating");
        self.fetch_pricing_plans().await;
    }

    /// Re-fetch, in the background, every category older than the stale time.
    pub fn refresh_stale(self: &Arc<Self>) {
        if self.members.is_stale(self.stale_after) {
            let this = self.clone();
            tokio::spawn(async move { this.fetch_members().await });
        }
        if self.alerts.is_stale(self.stale_after) {
            let this = self.clone();
            tokio::spawn(async move { this.fetch_emergency_alerts().await });
        }
        if self.plans.is_stale(self.stale_after) {
            let this = self.clone();
            tokio::spawn(async move { this.fetch_pricing_plans().await });
        }
    }

    /// Log every availability change of every category until the queries
    /// are dropped.
    pub fn log_availability_changes(&self) -> Vec<JoinHandle<()>> {
        vec![
            tokio::spawn(log_availability(Category::Members, self.members.subscribe())),
            tokio::spawn(log_availability(
                Category::EmergencyAlerts,
                self.alerts.subscribe(),
            )),
            tokio::spawn(log_availability(Category::PricingPlans, self.plans.subscribe())),
        ]
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    pub fn members(&self) -> Resolved<Member> {
        resolve_category(&self.members.snapshot())
    }

    pub fn emergency_alerts(&self) -> Resolved<EmergencyAlert> {
        resolve_category(&self.alerts.snapshot())
    }

    pub fn pricing_plans(&self) -> Resolved<PricingPlan> {
        resolve_category(&self.plans.snapshot())
    }

    pub fn members_query(&self) -> &Query<Member> {
        &self.members
    }

    pub fn emergency_alerts_query(&self) -> &Query<EmergencyAlert> {
        &self.alerts
    }

    pub fn pricing_plans_query(&self) -> &Query<PricingPlan> {
        &self.plans
    }

    /// Availability of every category, for health reporting.
    pub fn availability(&self) -> Vec<(Category, Availability)> {
        vec![
            (Category::Members, self.members.snapshot().availability()),
            (Category::EmergencyAlerts, self.alerts.snapshot().availability()),
            (Category::PricingPlans, self.plans.snapshot().availability()),
        ]
    }
}

async fn log_availability<T>(category: Category, mut rx: watch::Receiver<FetchState<T>>) {
    let mut last = rx.borrow_and_update().availability();
    while rx.changed().await.is_ok() {
        let current = rx.borrow_and_update().availability();
        if current != last {
            info!(
                category = %category,
                from = last.as_str(),
                to = current.as_str(),
                "Availability changed"
            );
            last = current;
        }
    }
}
