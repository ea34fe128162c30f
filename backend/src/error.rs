//! Error handling for the Farm Advisor service
//!
//! Every failure surfaces to clients as a single `{ "error": "..." }` body.
//! Internal details are logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every failure the client cannot act on
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to get AI response";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Geocoding API error: {0}")]
    GeocodingError(String),

    #[error("Soil API error: {0}")]
    SoilError(String),

    #[error("Weather API error: {0}")]
    WeatherError(String),

    #[error("Language model error: {0}")]
    LlmError(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status and client-facing message for this error
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            AppError::GeocodingError(_)
            | AppError::SoilError(_)
            | AppError::WeatherError(_)
            | AppError::LlmError(_)
            | AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
