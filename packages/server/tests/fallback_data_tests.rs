//! Tests for the static fallback records.

use server_core::common::Categorized;
use server_core::domains::emergency_alert::models::{AlertStatus, EmergencyAlert, Urgency};
use server_core::domains::member::models::Member;
use server_core::domains::pricing::models::PricingPlan;

#[test]
fn fallbacks_are_never_empty() {
    assert!(!Member::fallback().is_empty());
    assert!(!EmergencyAlert::fallback().is_empty());
    assert!(!PricingPlan::fallback().is_empty());
}

#[test]
fn fallbacks_are_deterministic() {
    assert_eq!(Member::fallback(), Member::fallback());
    assert_eq!(Member::fallback().as_ptr(), Member::fallback().as_ptr());
    assert_eq!(PricingPlan::fallback()[0].created_at, PricingPlan::fallback()[0].created_at);
}

#[test]
fn fallback_members_match_directory_samples() {
    let members = Member::fallback();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Sarah Johnson");
    assert!(members[0].available);
    assert_eq!(members[1].name, "Mike Chen");
    assert!(!members[1].available);
    assert!(members.iter().all(|m| m.emergency_contact));
}

#[test]
fn fallback_alert_is_an_active_high_urgency_request() {
    let alert = &EmergencyAlert::fallback()[0];

    assert_eq!(alert.pet_name, "Buddy");
    assert_eq!(alert.urgency, Urgency::High);
    assert_eq!(alert.status, AlertStatus::Active);
    assert_eq!(alert.urgency.label(), "HIGH PRIORITY");
}

#[test]
fn fallback_plans_are_basic_then_professional() {
    let plans = PricingPlan::fallback();

    assert_eq!(plans.len(), 2);
    assert_eq!((plans[0].title.as_str(), plans[0].price), ("Basic", 15.0));
    assert_eq!((plans[1].title.as_str(), plans[1].price), ("Professional", 25.0));
    assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
    assert_eq!(plans[0].features.len(), 4);
    assert_eq!(plans[1].features.len(), 5);
}
