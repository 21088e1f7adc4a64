//! Stable application-wide constants.
//!
//! Values here are structural invariants of the dashboard pipeline and
//! default fallbacks for env-var-based configuration. They should rarely
//! change. Deployment-specific knobs live in [`Config`](crate::config::Config).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "8501";

// --- Dataset locations (used when the *_CSV_PATH env vars are absent) ---

/// Street-sweeping route schedule with WKT line geometry.
pub const DEFAULT_ROUTES_CSV_PATH: &str = "./Street_Sweeping_Schedule_20241105.csv";
/// Pothole detection table with per-image metrics.
pub const DEFAULT_POTHOLE_CSV_PATH: &str = "./pothole_data.csv";

// --- Sampling ---

/// Seed for the outer random source. Overridden by `SAMPLE_SEED`.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;
/// Upper bound on the number of routes drawn onto the map. Overridden by `SAMPLE_SIZE`.
pub const DEFAULT_SAMPLE_SIZE: usize = 60;
/// Exclusive upper bound of the per-route reseed value drawn from the outer source.
pub const PAIRING_SEED_RANGE: u64 = 1_000;

// --- Map view (San Francisco) ---

pub const DEFAULT_MAP_CENTER_LAT: f64 = 37.7749;
pub const DEFAULT_MAP_CENTER_LNG: f64 = -122.4194;
pub const DEFAULT_MAP_ZOOM: u8 = 13;
pub const MAX_MAP_ZOOM: u8 = 20;

// --- Marker styling ---

/// Circle marker radius in pixels.
pub const MARKER_RADIUS: u32 = 10;
pub const MARKER_FILL_OPACITY: f64 = 0.7;
/// Width of the embedded thumbnail in the popup, in pixels.
pub const POPUP_IMAGE_WIDTH: u32 = 250;
/// Decimal places used for the anchor coordinates shown in popups.
pub const POPUP_COORD_PRECISION: usize = 6;

// --- Severity scale ---

pub const SEVERITY_MIN: f64 = 0.0;
pub const SEVERITY_MAX: f64 = 100.0;

// --- Link normalization ---

pub const DRIVE_THUMBNAIL_BASE: &str = "https://drive.google.com/thumbnail?id=";
