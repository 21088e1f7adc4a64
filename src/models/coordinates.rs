use serde::{Deserialize, Serialize};

/// A point in EPSG:4326, stored latitude-first the way map widgets take it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Geometry vertices are (x = longitude, y = latitude); no reprojection.
    pub fn from_vertex(vertex: geo::Coord<f64>) -> Self {
        Coordinates {
            lat: vertex.y,
            lng: vertex.x,
        }
    }

    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}
