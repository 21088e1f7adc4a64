use crate::models::{Quartile, QuartileChoice, UrbanRuralChoice};
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct RangeDefaults<T> {
    pub min: T,
    pub max: T,
}

/// Control defaults; resetting the dashboard means re-applying these.
#[derive(Debug, Serialize)]
pub struct FilterDefaults {
    pub severity_score: RangeDefaults<f64>,
    pub num_potholes: RangeDefaults<i64>,
    pub quartile: String,
    pub quartile_options: Vec<String>,
    /// Q1..Q4 boundaries of `damaged_area` over the full table
    pub quartile_edges: Option<[f64; 5]>,
    pub urban_rural: String,
    pub urban_rural_options: Vec<String>,
    pub locations_available: bool,
    /// `null` stands for rows without a location
    pub locations: Vec<Option<String>>,
    pub search: String,
}

/// GET /filters - Default filter state
pub async fn get_filter_defaults(State(state): State<Arc<AppState>>) -> Json<FilterDefaults> {
    let dashboard = &state.dashboard;
    let defaults = &dashboard.defaults;

    let quartile = match defaults.quartile {
        QuartileChoice::All => "all".to_string(),
        QuartileChoice::Only(q) => q.to_string(),
    };
    let urban_rural = match defaults.urban_rural {
        UrbanRuralChoice::All => "all".to_string(),
        UrbanRuralChoice::Flag(flag) => flag.to_string(),
    };

    Json(FilterDefaults {
        severity_score: RangeDefaults {
            min: defaults.score_range.0,
            max: defaults.score_range.1,
        },
        num_potholes: RangeDefaults {
            min: defaults.count_range.0,
            max: defaults.count_range.1,
        },
        quartile,
        quartile_options: std::iter::once("all".to_string())
            .chain(Quartile::ALL.iter().map(|q| q.to_string()))
            .collect(),
        quartile_edges: dashboard.quartiles.map(|q| q.edges()),
        urban_rural,
        urban_rural_options: vec!["all".to_string(), "0".to_string(), "1".to_string()],
        locations_available: dashboard.datasets.potholes.has_locations,
        locations: defaults.locations.clone(),
        search: defaults.search.clone(),
    })
}
