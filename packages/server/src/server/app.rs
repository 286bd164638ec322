//! Application setup and server configuration.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, patch},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_alert_handler, emergency_alerts_handler, health_handler, landing_handler,
    member_handler, members_handler, pricing_plans_handler, update_alert_status_handler,
    update_availability_handler,
};

/// CORS for the given origins; an empty list allows any origin.
///
/// Origins are validated by `Config`, so invalid entries only get here from
/// other callers and are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/landing", get(landing_handler))
        .route("/api/members", get(members_handler))
        .route("/api/members/:id", get(member_handler))
        .route(
            "/api/members/:id/availability",
            patch(update_availability_handler),
        )
        .route(
            "/api/emergency-alerts",
            get(emergency_alerts_handler).post(create_alert_handler),
        )
        .route(
            "/api/emergency-alerts/:id/status",
            patch(update_alert_status_handler),
        )
        .route("/api/pricing-plans", get(pricing_plans_handler))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(deps)
}
