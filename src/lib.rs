// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use config::TableLabels;
use services::pipeline::Dashboard;

// App state for sharing across the application
pub struct AppState {
    pub dashboard: Dashboard,
    pub table_labels: TableLabels,
}
