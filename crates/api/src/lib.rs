//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Shared application state
//! - Response types

pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use photodrop_core::storage::StorageService;
use photodrop_core::upload::UploadService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upload ticket service (absent when no bucket is configured).
    pub uploads: Option<Arc<UploadService<StorageService>>>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
