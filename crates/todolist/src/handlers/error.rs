//! Error responses for the todo handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use todolist_core::storage::RepositoryError;

/// Error outcome of a todo handler.
///
/// The three kinds map to fixed status codes. Storage failures carry the
/// underlying store error text to the caller; fine for an internal tool,
/// a hardening gap if callers are ever untrusted.
pub enum AppError {
    /// Required input missing; rejected before any store call.
    Validation(String),
    /// Point lookup or scan matched no record.
    NotFound(&'static str),
    /// The store call failed.
    Storage {
        message: &'static str,
        source: RepositoryError,
    },
}

impl AppError {
    /// Validation failure naming the missing required fields.
    pub fn missing(fields: Vec<&'static str>) -> Self {
        Self::Validation(format!("Missing required field(s): {}", fields.join(", ")))
    }

    /// Storage failure with a fixed operation message.
    pub fn storage(message: &'static str, source: RepositoryError) -> Self {
        Self::Storage { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string(), None),
            AppError::Storage { message, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message.to_string(),
                Some(source.to_string()),
            ),
        };

        tracing::warn!(status = %status, message = %message, "API error");

        let body = match error {
            Some(error) => json!({ "message": message, "error": error }),
            None => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}
