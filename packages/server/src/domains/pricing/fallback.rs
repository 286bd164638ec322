//! Static membership tiers shown when no live plans are available.

use chrono::DateTime;
use lazy_static::lazy_static;

use crate::domains::pricing::models::PricingPlan;

lazy_static! {
    pub static ref FALLBACK_PLANS: Vec<PricingPlan> = vec![
        PricingPlan {
            id: "1".to_string(),
            created_at: DateTime::from_timestamp_millis(1_757_586_400_000).unwrap_or_default(),
            title: "Basic".to_string(),
            price: 15.0,
            period: "month".to_string(),
            features: vec![
                "Access to member directory".to_string(),
                "Emergency alert notifications".to_string(),
                "Basic profile listing".to_string(),
                "Community forum access".to_string(),
            ],
            popular: false,
            stripe_price_id: None,
        },
        PricingPlan {
            id: "2".to_string(),
            created_at: DateTime::from_timestamp_millis(1_757_586_400_000).unwrap_or_default(),
            title: "Professional".to_string(),
            price: 25.0,
            period: "month".to_string(),
            features: vec![
                "Everything in Basic".to_string(),
                "Priority emergency alerts".to_string(),
                "Enhanced profile with photos".to_string(),
                "Client referral system".to_string(),
                "24/7 support hotline".to_string(),
            ],
            popular: true,
            stripe_price_id: None,
        },
    ];
}
