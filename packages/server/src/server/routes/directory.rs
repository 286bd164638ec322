//! Read routes - resolved sections and the landing page

use axum::{
    extract::{Path, State},
    Json,
};

use crate::common::Resolved;
use crate::domains::emergency_alert::actions::list_emergency_alerts;
use crate::domains::emergency_alert::EmergencyAlertData;
use crate::domains::landing::{landing_page, LandingPage};
use crate::domains::member::actions::{get_member, list_members};
use crate::domains::member::Member;
use crate::domains::pricing::{list_pricing_plans, PricingPlanData};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

pub async fn landing_handler(State(deps): State<ServerDeps>) -> Json<LandingPage> {
    deps.queries.refresh_stale();
    Json(landing_page(&deps))
}

pub async fn members_handler(State(deps): State<ServerDeps>) -> Json<Resolved<Member>> {
    deps.queries.refresh_stale();
    Json(list_members(&deps))
}

pub async fn member_handler(
    State(deps): State<ServerDeps>,
    Path(id): Path<String>,
) -> Result<Json<Member>, ApiError> {
    get_member(&id, &deps)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Member {}", id)))
}

pub async fn emergency_alerts_handler(
    State(deps): State<ServerDeps>,
) -> Json<Resolved<EmergencyAlertData>> {
    deps.queries.refresh_stale();
    Json(list_emergency_alerts(&deps))
}

pub async fn pricing_plans_handler(
    State(deps): State<ServerDeps>,
) -> Json<Resolved<PricingPlanData>> {
    deps.queries.refresh_stale();
    Json(list_pricing_plans(&deps))
}
