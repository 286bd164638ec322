//! Landing domain - assembles the public landing page
//!
//! Static marketing copy plus the three independently resolved sections.

use serde::Serialize;

use crate::common::Resolved;
use crate::domains::emergency_alert::actions::list_emergency_alerts;
use crate::domains::emergency_alert::EmergencyAlertData;
use crate::domains::member::actions::list_members;
use crate::domains::member::Member;
use crate::domains::pricing::{list_pricing_plans, PricingPlanData};
use crate::kernel::ServerDeps;

const HERO_IMAGE: &str =
    "https://d64gsuwffb70l.cloudfront.net/68c2a3c3c11b33509e8fc228_1757586406667_9924ff02.webp";

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "shield",
        title: "Trusted Network",
        description: "All members are verified and background checked for your peace of mind.",
    },
    Feature {
        icon: "phone",
        title: "24/7 Emergency Support",
        description: "Get help when you need it most with our round-the-clock emergency network.",
    },
    Feature {
        icon: "users",
        title: "Community Driven",
        description: "Connect with fellow pet sitters and build lasting professional relationships.",
    },
    Feature {
        icon: "globe",
        title: "Growing Network",
        description: "Starting in Auckland with plans to expand globally for worldwide coverage.",
    },
    Feature {
        icon: "heart",
        title: "Pet-Focused Care",
        description: "Every member shares a genuine love and commitment to animal welfare.",
    },
    Feature {
        icon: "clock",
        title: "Quick Response",
        description: "Fast emergency notifications ensure pets get the care they need promptly.",
    },
];

/// Everything the landing page renders, in page order.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub site_name: &'static str,
    pub hero: Hero,
    pub emergency_alerts: Resolved<EmergencyAlertData>,
    pub features: &'static [Feature],
    pub members: Resolved<Member>,
    pub pricing_plans: Resolved<PricingPlanData>,
}

/// Build the landing page from the current query snapshots.
pub fn landing_page(deps: &ServerDeps) -> LandingPage {
    LandingPage {
        site_name: "PetSitter Network NZ",
        hero: Hero {
            title: "Never Let Your Clients Down Again",
            subtitle: "Join Auckland's trusted pet sitter network. Get emergency backup support when life happens.",
            image: HERO_IMAGE,
            call_to_action: "Join the Network - $15/month",
        },
        emergency_alerts: list_emergency_alerts(deps),
        features: FEATURES,
        members: list_members(deps),
        pricing_plans: list_pricing_plans(deps),
    }
}
