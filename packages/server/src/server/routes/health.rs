use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::kernel::ServerDeps;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    data_service: &'static str,
    categories: BTreeMap<&'static str, &'static str>,
}

/// Health check endpoint
///
/// Always 200: a missing or failing data service only means fallback data
/// is being served. `categories` reports each category's availability.
pub async fn health_handler(State(deps): State<ServerDeps>) -> Json<HealthResponse> {
    let categories = deps
        .queries
        .availability()
        .into_iter()
        .map(|(category, availability)| (category.key(), availability.as_str()))
        .collect();

    Json(HealthResponse {
        status: "ok",
        data_service: if deps.store.is_configured() {
            "configured"
        } else {
            "unconfigured"
        },
        categories,
    })
}
