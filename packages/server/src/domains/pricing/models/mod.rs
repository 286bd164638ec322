pub mod pricing_plan;

pub use pricing_plan::PricingPlan;
