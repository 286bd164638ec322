//! API error responses
//!
//! Maps action failures onto HTTP status codes by looking for a
//! `SupabaseError` anywhere in the error chain.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use supabase_client::SupabaseError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(err) => status_for(err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

fn status_for(err: &anyhow::Error) -> StatusCode {
    let supabase = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SupabaseError>());
    match supabase {
        Some(SupabaseError::Config(_)) => StatusCode::SERVICE_UNAVAILABLE,
        Some(SupabaseError::NotFound { .. }) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_GATEWAY,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::NotFound(what) => format!("{} not found", what),
            ApiError::Internal(err) => format!("{:#}", err),
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn status_of(err: SupabaseError) -> StatusCode {
        let err: anyhow::Result<()> = Err(err).context("Failed to update availability");
        ApiError::from(err.unwrap_err()).status()
    }

    #[test]
    fn maps_supabase_errors_through_context() {
        assert_eq!(
            status_of(SupabaseError::Config("missing".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(SupabaseError::NotFound { table: "members".into() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(SupabaseError::Api { status: 500, message: "boom".into() }),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn unknown_errors_are_internal() {
        let err = ApiError::from(anyhow::anyhow!("boom"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
