//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with fixed status codes and
//! messages. Backend detail goes to the log, never to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body was not decodable JSON for the expected shape (400)
    InvalidFormat,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Album not found (404)
    NotFound { id: String },

    /// Insert hit an existing id (500, logged)
    Duplicate { id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidFormat => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON format" }),
            ),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            Self::NotFound { id } => {
                tracing::debug!(id = %id, "album not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "message": "Album not found" }),
                )
            }
            Self::Duplicate { id } => {
                tracing::error!(id = %id, "insert rejected: duplicate album id");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "album already exists" }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal storage error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            DbError::Duplicate { id } => Self::Duplicate { id },
            _ => Self::Database(e),
        }
    }
}
