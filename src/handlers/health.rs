//! Health check endpoint
//!
//! Provides a simple health check for monitoring and container probes.
//! Reports the served model name; does not probe the model endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::handlers::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Model identifier this instance serves
    pub model: String,
}

/// GET /health handler
///
/// Returns 200 OK whenever the server is up.
pub async fn handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK",
            model: state.client().model().to_string(),
        }),
    )
}
