pub mod dashboard;
pub mod debug;
pub mod filters;
pub mod markers;
pub mod potholes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/markers", get(markers::get_markers))
        .route("/potholes", get(potholes::query_potholes))
        .route("/filters", get(filters::get_filter_defaults))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}

/// API under `/api/v1` plus the dashboard page at `/`
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .nest("/api/v1", create_router(state))
}
