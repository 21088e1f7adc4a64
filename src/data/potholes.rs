use crate::data::links::convert_drive_link;
use crate::data::Table;
use crate::error::{AppError, Result};
use crate::models::{PotholeRecord, PotholeTable};

pub const IMAGE_ID_COLUMN: &str = "image_id";
pub const DAMAGED_AREA_COLUMN: &str = "damaged_area";
pub const NUM_POTHOLES_COLUMN: &str = "num_potholes";
pub const URBAN_RURAL_COLUMN: &str = "urban/rural";
pub const SEVERITY_SCORE_COLUMN: &str = "severity_score";
pub const LINK_PHOTO_COLUMN: &str = "link_photo";
pub const LOCATION_COLUMN: &str = "location";

struct Columns {
    image_id: usize,
    damaged_area: usize,
    num_potholes: usize,
    urban_rural: usize,
    severity_score: usize,
    link_photo: Option<usize>,
    location: Option<usize>,
}

/// Type the pothole table. Optional columns are feature-detected; a
/// malformed share link or unparsable number fails the whole load.
pub fn parse_potholes(table: &Table) -> Result<PotholeTable> {
    let columns = Columns {
        image_id: table.require_column(IMAGE_ID_COLUMN)?,
        damaged_area: table.require_column(DAMAGED_AREA_COLUMN)?,
        num_potholes: table.require_column(NUM_POTHOLES_COLUMN)?,
        urban_rural: table.require_column(URBAN_RURAL_COLUMN)?,
        severity_score: table.require_column(SEVERITY_SCORE_COLUMN)?,
        link_photo: table.column_index(LINK_PHOTO_COLUMN),
        location: table.column_index(LOCATION_COLUMN),
    };

    if columns.link_photo.is_none() {
        tracing::warn!("No '{}' column, markers will have no thumbnails", LINK_PHOTO_COLUMN);
    }
    if columns.location.is_none() {
        tracing::warn!("No '{}' column, location filter disabled", LOCATION_COLUMN);
    }

    let records = (0..table.len())
        .map(|row| parse_row(table, &columns, row))
        .collect::<Result<Vec<_>>>()?;

    Ok(PotholeTable {
        records,
        has_photo_links: columns.link_photo.is_some(),
        has_locations: columns.location.is_some(),
    })
}

fn parse_row(table: &Table, columns: &Columns, row: usize) -> Result<PotholeRecord> {
    let text = |idx: usize| table.cell(row, idx).map(str::to_owned);
    let column_name = |idx: usize| table.headers[idx].as_str();

    let float = |idx: usize| -> Result<Option<f64>> {
        table
            .cell(row, idx)
            .map(|v| parse_float(v).ok_or_else(|| bad_value(row, column_name(idx), v)))
            .transpose()
    };
    let integer = |idx: usize| -> Result<Option<i64>> {
        table
            .cell(row, idx)
            .map(|v| parse_integer(v).ok_or_else(|| bad_value(row, column_name(idx), v)))
            .transpose()
    };

    let link_photo = columns.link_photo.and_then(text);
    let converted_link = link_photo
        .as_deref()
        .map(convert_drive_link)
        .transpose()
        .map_err(|e| match e {
            AppError::LinkFormat(msg) => AppError::LinkFormat(format!("row {}: {}", row, msg)),
            other => other,
        })?;

    Ok(PotholeRecord {
        image_id: text(columns.image_id),
        damaged_area: float(columns.damaged_area)?,
        num_potholes: integer(columns.num_potholes)?,
        urban_rural: integer(columns.urban_rural)?,
        severity_score: float(columns.severity_score)?,
        link_photo,
        converted_link,
        location: columns.location.and_then(text),
    })
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Integers may arrive float-formatted ("3.0") when the column had nulls.
fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    value.parse().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.fract() == 0.0 && v.is_finite())
            .map(|v| v as i64)
    })
}

fn bad_value(row: usize, column: &str, value: &str) -> AppError {
    AppError::DataSource(format!(
        "row {}: invalid numeric value '{}' in column '{}'",
        row, value, column
    ))
}
