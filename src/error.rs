use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Geometry parse error: {0}")]
    GeometryParse(String),

    #[error("Link format error: {0}")]
    LinkFormat(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::DataSource(e.to_string())
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DataSource(ref e) => {
                tracing::error!("Data source error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Dataset unavailable")
            }
            AppError::GeometryParse(ref e) => {
                tracing::error!("Geometry parse error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid route geometry")
            }
            AppError::LinkFormat(ref e) => {
                tracing::error!("Link format error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid photo link")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
