use crate::AppState;
use axum::{extract::State, Json};
use geojson::FeatureCollection;
use std::sync::Arc;

/// GET /markers - Severity markers as GeoJSON, with the map view settings
pub async fn get_markers(State(state): State<Arc<AppState>>) -> Json<FeatureCollection> {
    Json(state.dashboard.map.to_feature_collection())
}
