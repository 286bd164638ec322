//! Tests for per-category resolution of live vs. fallback data.

mod common;

use common::{alert, member, plan};
use proptest::prelude::*;
use server_core::common::{resolve, resolve_category, FetchError, FetchState, Resolved};
use server_core::domains::emergency_alert::models::{AlertStatus, EmergencyAlert};
use server_core::domains::member::models::Member;
use server_core::domains::pricing::models::PricingPlan;

fn state<T>(records: Option<Vec<T>>, is_loading: bool, error: Option<&str>) -> FetchState<T> {
    FetchState {
        records,
        is_loading,
        error: error.map(FetchError::new),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn two_live_members_are_shown_as_is() {
    let live = vec![member("a", "Tama"), member("b", "Mere")];

    let resolved = resolve_category(&FetchState::loaded(live.clone()));

    assert_eq!(
        resolved,
        Resolved::Ready {
            records: live,
            is_live: true
        }
    );
}

#[test]
fn loading_alerts_resolve_to_loading() {
    let resolved = resolve_category::<EmergencyAlert>(&FetchState::pending());

    assert!(resolved.is_loading());
    assert_eq!(resolved.display_records(), None);
}

#[test]
fn failed_pricing_fetch_shows_fallback_plans() {
    let resolved = resolve_category::<PricingPlan>(&state(None, false, Some("connection refused")));

    let titles: Vec<&str> = resolved
        .display_records()
        .unwrap()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Basic", "Professional"]);
    assert!(!resolved.is_loading());
    assert!(!resolved.is_live());
}

#[test]
fn empty_alert_list_shows_fallback_not_empty_state() {
    let resolved = resolve_category::<EmergencyAlert>(&FetchState::loaded(vec![]));

    let records = resolved.display_records().unwrap();
    assert!(!records.is_empty());
    assert_eq!(records[0].pet_name, "Buddy");
    assert!(!resolved.is_live());
}

#[test]
fn live_records_win_over_error() {
    let stale = vec![plan("9", "Weekly", 5.0)];

    let resolved = resolve_category(&state(Some(stale.clone()), false, Some("timeout")));

    assert_eq!(
        resolved,
        Resolved::Ready {
            records: stale,
            is_live: true
        }
    );
}

#[test]
fn non_active_alerts_pass_through_verbatim() {
    let mixed = vec![
        alert("1", "Milo", AlertStatus::Fulfilled),
        alert("2", "Luna", AlertStatus::Active),
    ];

    let resolved = resolve_category(&FetchState::loaded(mixed.clone()));

    assert_eq!(resolved.display_records(), Some(mixed.as_slice()));
}

#[test]
fn never_fetched_snapshot_falls_back() {
    let resolved = resolve_category::<Member>(&FetchState::idle());

    assert_eq!(resolved.display_records().unwrap().len(), 2);
    assert!(!resolved.is_live());
}

// =============================================================================
// Properties
// =============================================================================

fn arb_state() -> impl Strategy<Value = FetchState<u32>> {
    (
        proptest::option::of(proptest::collection::vec(any::<u32>(), 0..6)),
        any::<bool>(),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(records, is_loading, error)| FetchState {
            records,
            is_loading,
            error: error.map(FetchError::new),
        })
}

const FALLBACK: &[u32] = &[100, 200];

proptest! {
    #[test]
    fn loading_always_wins(records in proptest::option::of(proptest::collection::vec(any::<u32>(), 0..6)),
                           error in proptest::option::of("[a-z]{1,8}")) {
        let resolved = resolve(&state(records, true, error.as_deref()), FALLBACK);
        prop_assert!(resolved.is_loading());
    }

    #[test]
    fn non_empty_records_are_returned_verbatim(records in proptest::collection::vec(any::<u32>(), 1..8),
                                               error in proptest::option::of("[a-z]{1,8}")) {
        let resolved = resolve(&state(Some(records.clone()), false, error.as_deref()), FALLBACK);
        prop_assert_eq!(resolved, Resolved::Ready { records, is_live: true });
    }

    #[test]
    fn missing_or_empty_records_fall_back(empty in any::<bool>(),
                                          error in proptest::option::of("[a-z]{1,8}")) {
        let records = if empty { Some(vec![]) } else { None };
        let resolved = resolve(&state(records, false, error.as_deref()), FALLBACK);
        prop_assert_eq!(resolved, Resolved::Ready { records: FALLBACK.to_vec(), is_live: false });
    }

    #[test]
    fn resolution_is_idempotent(input in arb_state()) {
        prop_assert_eq!(resolve(&input, FALLBACK), resolve(&input, FALLBACK));
    }

    #[test]
    fn never_mixes_live_and_fallback(input in arb_state()) {
        if let Resolved::Ready { records, is_live } = resolve(&input, FALLBACK) {
            if is_live {
                prop_assert_eq!(Some(records), input.records);
            } else {
                prop_assert_eq!(records, FALLBACK.to_vec());
            }
        }
    }
}
