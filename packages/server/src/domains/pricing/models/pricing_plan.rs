use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Categorized, Category};
use crate::domains::pricing::fallback::FALLBACK_PLANS;

/// Pricing plan model - a membership tier
///
/// At most one plan is expected to be `popular`; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub price: f64,
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
}

impl PricingPlan {
    /// Price as shown on the card: whole amounts drop the decimals.
    pub fn display_price(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${}", self.price)
        }
    }

    pub fn button_text(&self) -> String {
        format!("Choose {}", self.title)
    }
}

impl Categorized for PricingPlan {
    const CATEGORY: Category = Category::PricingPlans;

    fn fallback() -> &'static [Self] {
        FALLBACK_PLANS.as_slice()
    }
}
