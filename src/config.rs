use crate::constants::*;
use crate::models::Coordinates;
use std::env;
use std::path::PathBuf;

/// Which header set the data table is rendered with.
/// Filtering always runs on the raw column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLabels {
    Raw,
    #[default]
    Human,
}

impl std::str::FromStr for TableLabels {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(TableLabels::Raw),
            "human" => Ok(TableLabels::Human),
            _ => Err(format!(
                "Invalid table labels: {}. Use 'raw' or 'human'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub routes_csv_path: PathBuf,
    pub pothole_csv_path: PathBuf,
    pub sample: SampleConfig,
    pub map: MapViewConfig,
    pub table_labels: TableLabels,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleConfig {
    /// Seed of the outer random source
    pub seed: u64,

    /// Maximum number of routes drawn; fewer candidates means all of them
    pub size: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SAMPLE_SEED,
            size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapViewConfig {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: Coordinates {
                lat: DEFAULT_MAP_CENTER_LAT,
                lng: DEFAULT_MAP_CENTER_LNG,
            },
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl SampleConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let size: usize = env::var("SAMPLE_SIZE")
            .unwrap_or_else(|_| defaults.size.to_string())
            .parse()
            .map_err(|_| "Invalid SAMPLE_SIZE")?;

        if size == 0 {
            return Err("SAMPLE_SIZE must be greater than 0".to_string());
        }

        Ok(Self {
            seed: env::var("SAMPLE_SEED")
                .unwrap_or_else(|_| defaults.seed.to_string())
                .parse()
                .map_err(|_| "Invalid SAMPLE_SEED")?,
            size,
        })
    }
}

impl MapViewConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let lat: f64 = env::var("MAP_CENTER_LAT")
            .unwrap_or_else(|_| defaults.center.lat.to_string())
            .parse()
            .map_err(|_| "Invalid MAP_CENTER_LAT")?;
        let lng: f64 = env::var("MAP_CENTER_LNG")
            .unwrap_or_else(|_| defaults.center.lng.to_string())
            .parse()
            .map_err(|_| "Invalid MAP_CENTER_LNG")?;
        let zoom: u8 = env::var("MAP_ZOOM")
            .unwrap_or_else(|_| defaults.zoom.to_string())
            .parse()
            .map_err(|_| "Invalid MAP_ZOOM")?;

        if zoom > MAX_MAP_ZOOM {
            return Err(format!("MAP_ZOOM must be between 0 and {}", MAX_MAP_ZOOM));
        }

        Ok(Self {
            center: Coordinates::new(lat, lng)?,
            zoom,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            routes_csv_path: env::var("ROUTES_CSV_PATH")
                .unwrap_or_else(|_| DEFAULT_ROUTES_CSV_PATH.to_string())
                .into(),
            pothole_csv_path: env::var("POTHOLE_CSV_PATH")
                .unwrap_or_else(|_| DEFAULT_POTHOLE_CSV_PATH.to_string())
                .into(),
            sample: SampleConfig::from_env()?,
            map: MapViewConfig::from_env()?,
            table_labels: env::var("TABLE_LABELS")
                .unwrap_or_else(|_| "human".to_string())
                .parse()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
