use crate::config::MapViewConfig;
use crate::models::Coordinates;
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;

/// A circle marker handed to the map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub location: Coordinates,
    pub severity_score: f64,
    /// `#RRGG00`, used for both border and fill
    pub color: String,
    pub radius: u32,
    pub fill: bool,
    pub fill_opacity: f64,
    pub popup: String,
    pub tooltip: String,
}

impl MarkerSpec {
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("severity_score".to_string(), json!(self.severity_score));
        properties.insert("color".to_string(), json!(self.color));
        properties.insert("fill_color".to_string(), json!(self.color));
        properties.insert("radius".to_string(), json!(self.radius));
        properties.insert("fill".to_string(), json!(self.fill));
        properties.insert("fill_opacity".to_string(), json!(self.fill_opacity));
        properties.insert("popup".to_string(), json!(self.popup));
        properties.insert("tooltip".to_string(), json!(self.tooltip));

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(
                &self.location.to_point(),
            ))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// The map widget the renderer appends markers to.
#[derive(Debug, Clone)]
pub struct MapWidget {
    pub view: MapViewConfig,
    markers: Vec<MarkerSpec>,
}

impl MapWidget {
    pub fn new(view: MapViewConfig) -> Self {
        MapWidget {
            view,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: MarkerSpec) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    /// GeoJSON with the view settings as foreign members `center` and `zoom`
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut foreign_members = JsonObject::new();
        foreign_members.insert("center".to_string(), json!(self.view.center));
        foreign_members.insert("zoom".to_string(), json!(self.view.zoom));

        FeatureCollection {
            bbox: None,
            features: self.markers.iter().map(MarkerSpec::to_feature).collect(),
            foreign_members: Some(foreign_members),
        }
    }
}
