//! Write routes - each refreshes its category before responding

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domains::emergency_alert::actions::{create_emergency_alert, update_alert_status};
use crate::domains::emergency_alert::models::{EmergencyAlert, NewEmergencyAlert, StatusUpdate};
use crate::domains::member::actions::update_member_availability;
use crate::domains::member::models::{AvailabilityUpdate, Member};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

pub async fn update_availability_handler(
    State(deps): State<ServerDeps>,
    Path(id): Path<String>,
    Json(update): Json<AvailabilityUpdate>,
) -> Result<Json<Member>, ApiError> {
    let member = update_member_availability(&id, update.available, &deps).await?;
    Ok(Json(member))
}

pub async fn create_alert_handler(
    State(deps): State<ServerDeps>,
    Json(alert): Json<NewEmergencyAlert>,
) -> Result<(StatusCode, Json<EmergencyAlert>), ApiError> {
    let created = create_emergency_alert(alert, &deps).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_alert_status_handler(
    State(deps): State<ServerDeps>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<EmergencyAlert>, ApiError> {
    let alert = update_alert_status(&id, update.status, &deps).await?;
    Ok(Json(alert))
}
