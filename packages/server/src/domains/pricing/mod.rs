//! Pricing domain - membership tiers

pub mod data;
pub mod fallback;
pub mod models;

pub use data::PricingPlanData;
pub use fallback::FALLBACK_PLANS;
pub use models::PricingPlan;

use crate::common::Resolved;
use crate::kernel::ServerDeps;

/// Resolved pricing cards: live plans, the fallback tiers, or loading.
pub fn list_pricing_plans(deps: &ServerDeps) -> Resolved<PricingPlanData> {
    deps.queries.pricing_plans().map(PricingPlanData::from)
}
