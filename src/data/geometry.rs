use crate::data::Table;
use crate::error::{AppError, Result};
use crate::models::RouteRecord;
use std::collections::BTreeMap;
use std::str::FromStr;

pub const LINE_COLUMN: &str = "Line";

/// Parse one WKT string into a geometry. Strict: malformed text is an error.
pub fn parse_wkt(text: &str) -> Result<geo::Geometry<f64>> {
    let parsed = wkt::Wkt::<f64>::from_str(text)
        .map_err(|e| AppError::GeometryParse(format!("{}: '{}'", e, text)))?;
    geo::Geometry::try_from(parsed)
        .map_err(|e| AppError::GeometryParse(format!("{}: '{}'", e, text)))
}

/// Build the route working set: rows with a null `Line` are dropped, every
/// remaining row gets its geometry parsed. One malformed row fails the batch.
pub fn parse_routes(table: &Table) -> Result<Vec<RouteRecord>> {
    let line_idx = table.require_column(LINE_COLUMN)?;

    let mut routes = Vec::with_capacity(table.len());
    for (row, cells) in table.rows.iter().enumerate() {
        let Some(line) = cells.get(line_idx).and_then(|c| c.as_ref()) else {
            continue;
        };

        let geometry = parse_wkt(line).map_err(|e| match e {
            AppError::GeometryParse(msg) => AppError::GeometryParse(format!("row {}: {}", row, msg)),
            other => other,
        })?;

        let attributes: BTreeMap<String, String> = table
            .headers
            .iter()
            .zip(cells)
            .enumerate()
            .filter(|(i, _)| *i != line_idx)
            .filter_map(|(_, (header, cell))| cell.as_ref().map(|v| (header.clone(), v.clone())))
            .collect();

        routes.push(RouteRecord {
            row,
            attributes,
            line: Some(line.clone()),
            geometry: Some(geometry),
        });
    }

    let dropped = table.len() - routes.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} route rows with no geometry", dropped);
    }
    tracing::info!("Parsed geometry for {} route rows", routes.len());

    Ok(routes)
}
