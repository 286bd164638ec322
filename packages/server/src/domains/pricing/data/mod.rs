use serde::Serialize;

use crate::domains::pricing::models::PricingPlan;

/// Pricing plan as handed to the pricing card
#[derive(Debug, Clone, Serialize)]
pub struct PricingPlanData {
    #[serde(flatten)]
    pub plan: PricingPlan,
    pub display_price: String,
    pub button_text: String,
}

impl From<PricingPlan> for PricingPlanData {
    fn from(plan: PricingPlan) -> Self {
        Self {
            display_price: plan.display_price(),
            button_text: plan.button_text(),
            plan,
        }
    }
}
