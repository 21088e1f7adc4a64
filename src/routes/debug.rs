use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Report what the loaded session contains
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let dashboard = &state.dashboard;
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    status["checks"]["routes"] = json!(dashboard.datasets.routes.len());
    status["checks"]["potholes"] = json!(dashboard.datasets.potholes.len());
    status["checks"]["markers"] = json!(dashboard.map.markers().len());
    status["checks"]["photo_links"] = json!(dashboard.datasets.potholes.has_photo_links);

    if dashboard.datasets.potholes.is_empty() {
        status["status"] = json!("degraded");
    }

    Json(status)
}
