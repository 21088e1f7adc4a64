use crate::config::TableLabels;
use crate::error::{AppError, Result};
use crate::models::{FilterState, QuartileChoice, UrbanRuralChoice};
use crate::services::filter_engine::{project, DisplayTable};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the pothole table. Anything omitted falls back to
/// the dashboard defaults.
///
/// `locations` repeats once per selected value (`?locations=a&locations=b`)
/// and is collected from the raw pairs; an empty value selects rows without
/// a location.
#[derive(Debug, Default, Deserialize)]
pub struct PotholeQueryParams {
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    /// `all` or `Q1`..`Q4`
    pub quartile: Option<String>,
    pub min_count: Option<i64>,
    pub max_count: Option<i64>,
    /// `all`, `0` or `1`
    pub urban_rural: Option<String>,
    #[serde(skip)]
    pub locations: Option<Vec<String>>,
    pub search: Option<String>,
    /// `raw` or `human`
    pub labels: Option<String>,
}

impl PotholeQueryParams {
    /// Collect every `locations` pair, keeping values exactly as sent
    pub fn with_locations(mut self, pairs: &[(String, String)]) -> Self {
        let selected: Vec<String> = pairs
            .iter()
            .filter(|(key, _)| key == "locations")
            .map(|(_, value)| value.clone())
            .collect();
        if !selected.is_empty() {
            self.locations = Some(selected);
        }
        self
    }

    /// Overlay the supplied parameters on the default filter state
    pub fn to_filter_state(&self, defaults: &FilterState) -> Result<FilterState> {
        let score_range = (
            self.min_score.unwrap_or(defaults.score_range.0),
            self.max_score.unwrap_or(defaults.score_range.1),
        );
        if score_range.0 > score_range.1 {
            return Err(AppError::InvalidRequest(
                "min_score must not exceed max_score".to_string(),
            ));
        }

        let count_range = (
            self.min_count.unwrap_or(defaults.count_range.0),
            self.max_count.unwrap_or(defaults.count_range.1),
        );
        if count_range.0 > count_range.1 {
            return Err(AppError::InvalidRequest(
                "min_count must not exceed max_count".to_string(),
            ));
        }

        let quartile = match &self.quartile {
            None => defaults.quartile,
            Some(q) => q.parse::<QuartileChoice>().map_err(AppError::InvalidRequest)?,
        };
        let urban_rural = match &self.urban_rural {
            None => defaults.urban_rural,
            Some(u) => u
                .parse::<UrbanRuralChoice>()
                .map_err(AppError::InvalidRequest)?,
        };

        let locations = match &self.locations {
            None => defaults.locations.clone(),
            Some(list) => list
                .iter()
                .map(|value| (!value.is_empty()).then(|| value.clone()))
                .collect(),
        };

        Ok(FilterState {
            score_range,
            quartile,
            count_range,
            urban_rural,
            locations,
            search: self.search.clone().unwrap_or_default(),
        })
    }

    pub fn table_labels(&self, fallback: TableLabels) -> Result<TableLabels> {
        match &self.labels {
            None => Ok(fallback),
            Some(labels) => labels.parse().map_err(AppError::InvalidRequest),
        }
    }
}

/// GET /potholes - Filtered, projected pothole table
pub async fn query_potholes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PotholeQueryParams>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DisplayTable>> {
    let dashboard = &state.dashboard;
    let params = params.with_locations(&pairs);
    let filter_state = params.to_filter_state(&dashboard.defaults)?;
    let labels = params.table_labels(state.table_labels)?;

    tracing::debug!("Pothole query: {:?}", filter_state);

    let view = dashboard.filter(&filter_state);
    Ok(Json(project(&view, labels)))
}
