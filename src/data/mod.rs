//! Dataset loading: delimited files into in-memory tables, then into typed
//! route and pothole records.

pub mod geometry;
pub mod links;
pub mod potholes;

use crate::error::{AppError, Result};
use crate::models::{PotholeTable, RouteRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell spellings read as null, following the usual dataframe conventions.
const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
];

/// A delimited text table with its header row preserved verbatim.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::DataSource(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
            .map_err(|e| AppError::DataSource(format!("{}: {}", path.display(), e)))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        if headers.is_empty() {
            return Err(AppError::DataSource(
                "CSV file contains no header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        if NULL_MARKERS.contains(&cell) {
                            None
                        } else {
                            Some(cell.to_owned())
                        }
                    })
                    .collect(),
            );
        }

        Ok(Table { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| AppError::DataSource(format!("Missing required column '{}'", name)))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }
}

/// Both datasets, typed and ready for sampling and filtering.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// Route rows with a non-null `Line`, in file order
    pub routes: Vec<RouteRecord>,
    pub potholes: PotholeTable,
}

/// Load the route schedule and the pothole table. Any failure aborts the
/// whole load.
pub fn load_datasets(routes_path: &Path, pothole_path: &Path) -> Result<Datasets> {
    let route_table = Table::from_path(routes_path)?;
    tracing::info!(
        "Loaded {} route rows from {}",
        route_table.len(),
        routes_path.display()
    );

    let pothole_table = Table::from_path(pothole_path)?;
    tracing::info!(
        "Loaded {} pothole rows from {}",
        pothole_table.len(),
        pothole_path.display()
    );

    Datasets::from_tables(&route_table, &pothole_table)
}

impl Datasets {
    pub fn from_tables(route_table: &Table, pothole_table: &Table) -> Result<Self> {
        let routes = geometry::parse_routes(route_table)?;
        let potholes = potholes::parse_potholes(pothole_table)?;
        Ok(Datasets { routes, potholes })
    }
}
