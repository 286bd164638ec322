//! Data availability resolution
//!
//! Decides, per category, whether the presentation layer shows live records,
//! static fallback records, or a loading indicator. Pure and infallible:
//! remote failures degrade to the fallback and are never surfaced upward.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use super::fetch_state::{Availability, FetchState};

/// One of the three independently resolved record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Members,
    EmergencyAlerts,
    PricingPlans,
}

impl Category {
    /// Cache key, as used in logs.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Members => "members",
            Category::EmergencyAlerts => "emergency-alerts",
            Category::PricingPlans => "pricing-plans",
        }
    }

    /// Remote table backing this category.
    pub fn table(&self) -> &'static str {
        match self {
            Category::Members => "members",
            Category::EmergencyAlerts => "emergency_alerts",
            Category::PricingPlans => "pricing_plans",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Members,
            Category::EmergencyAlerts,
            Category::PricingPlans,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A record kind with a category and a static fallback sequence.
pub trait Categorized: Clone + 'static {
    const CATEGORY: Category;

    /// Hard-coded records shown when live data is unusable. Never empty.
    fn fallback() -> &'static [Self];
}

/// Rendering-ready value for one category.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    /// Show a loading indicator; there are no records to read yet.
    Loading,
    /// Records to display. `is_live` is false for fallback records.
    Ready { records: Vec<T>, is_live: bool },
}

impl<T> Resolved<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resolved::Loading)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Resolved::Ready { is_live: true, .. })
    }

    /// Records to display, or `None` while loading.
    pub fn display_records(&self) -> Option<&[T]> {
        match self {
            Resolved::Loading => None,
            Resolved::Ready { records, .. } => Some(records),
        }
    }

    /// Apply `f` to every record, keeping the loading/live shape.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Loading => Resolved::Loading,
            Resolved::Ready { records, is_live } => Resolved::Ready {
                records: records.into_iter().map(f).collect(),
                is_live,
            },
        }
    }
}

/// Resolve a snapshot against a fallback sequence.
///
/// 1. loading → `Loading`
/// 2. any records → those records, live (even if an error is also set)
/// 3. otherwise → the fallback, not live
pub fn resolve<T: Clone>(state: &FetchState<T>, fallback: &[T]) -> Resolved<T> {
    if state.is_loading {
        return Resolved::Loading;
    }

    match &state.records {
        Some(records) if !records.is_empty() => Resolved::Ready {
            records: records.clone(),
            is_live: true,
        },
        _ => Resolved::Ready {
            records: fallback.to_vec(),
            is_live: false,
        },
    }
}

/// Resolve a snapshot for a categorized record kind, logging substitutions.
pub fn resolve_category<T: Categorized>(state: &FetchState<T>) -> Resolved<T> {
    let availability = state.availability();
    if matches!(availability, Availability::Failed | Availability::Empty) {
        debug!(
            category = %T::CATEGORY,
            availability = availability.as_str(),
            error = state.error.as_ref().map(|e| e.message.as_str()),
            "Substituting fallback records"
        );
    }
    resolve(state, T::fallback())
}

impl<T: Serialize> Serialize for Resolved<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut section = serializer.serialize_struct("Resolved", 3)?;
        match self {
            Resolved::Loading => {
                section.serialize_field("loading", &true)?;
                section.serialize_field("live", &false)?;
                section.serialize_field("records", &[] as &[T])?;
            }
            Resolved::Ready { records, is_live } => {
                section.serialize_field("loading", &false)?;
                section.serialize_field("live", is_live)?;
                section.serialize_field("records", records)?;
            }
        }
        section.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FetchError;

    #[test]
    fn loading_serializes_without_records() {
        let json = serde_json::to_value(Resolved::<u8>::Loading).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "loading": true, "live": false, "records": [] })
        );
    }

    #[test]
    fn ready_serializes_records_and_liveness() {
        let json = serde_json::to_value(Resolved::Ready {
            records: vec![1, 2],
            is_live: true,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "loading": false, "live": true, "records": [1, 2] })
        );
    }

    #[test]
    fn map_keeps_shape() {
        let resolved = resolve(&FetchState::failed(FetchError::new("x")), &[1, 2]).map(|n| n * 10);

        assert_eq!(
            resolved,
            Resolved::Ready {
                records: vec![10, 20],
                is_live: false
            }
        );
    }
}
