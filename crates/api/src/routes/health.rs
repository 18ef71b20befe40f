//! Health check endpoint.
//!
//! Besides liveness, the response reports whether upload issuing is
//! available, so an operator can tell a running-but-unconfigured instance
//! (no bucket) apart from a healthy one without triggering a failing
//! `/upload` call.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Upload issuing availability: `ready` or `unconfigured`.
    pub uploads: &'static str,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uploads: if state.uploads.is_some() {
            "ready"
        } else {
            "unconfigured"
        },
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
