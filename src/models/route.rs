use crate::models::Coordinates;
use std::collections::BTreeMap;

/// One row of the street-sweeping schedule.
///
/// Only rows with a non-null `Line` field are ever constructed; every other
/// column is carried through untouched in `attributes`.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// Zero-based data row in the source file (header excluded)
    pub row: usize,
    pub attributes: BTreeMap<String, String>,
    /// Raw WKT as read from the `Line` column
    pub line: Option<String>,
    pub geometry: Option<geo::Geometry<f64>>,
}

impl RouteRecord {
    /// First vertex of the route, if the geometry is a non-empty LineString.
    /// Every other geometry type yields `None`.
    pub fn anchor(&self) -> Option<Coordinates> {
        match self.geometry.as_ref()? {
            geo::Geometry::LineString(line) => line.0.first().copied().map(Coordinates::from_vertex),
            _ => None,
        }
    }

    pub fn attribute(&self, column: &str) -> Option<&str> {
        self.attributes.get(column).map(String::as_str)
    }
}
