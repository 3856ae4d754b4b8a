//! Application error type and its HTTP representation.
//!
//! Every error is rendered as the service's response envelope, which carries
//! the status code in a `response` field alongside the HTTP status:
//!
//! ```json
//! { "response": 400, "error": "A URL is required." }
//! { "response": 404, "results": "Content not found." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Message returned for every unresolved short code.
pub const NOT_FOUND_MESSAGE: &str = "Content not found.";

/// Body of a failed request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorEnvelope {
    NotFound { response: u16, results: String },
    Failure { response: u16, error: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty input.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The long URL is already mapped.
    #[error("{message}")]
    DuplicateUrl { message: String, details: Value },

    /// No mapping matches the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage or other unexpected failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate_url(long_url: &str) -> Self {
        Self::DuplicateUrl {
            message: format!("A shortened URL for {} has already been generated.", long_url),
            details: json!({ "long_url": long_url }),
        }
    }

    pub fn not_found(details: Value) -> Self {
        Self::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status associated with this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateUrl { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured details attached to the error, used for logging.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::DuplicateUrl { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    /// Converts the error into the response envelope.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let response = self.status().as_u16();
        match self {
            AppError::NotFound { message, .. } => ErrorEnvelope::NotFound {
                response,
                results: message.clone(),
            },
            other => ErrorEnvelope::Failure {
                response,
                error: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(details = %self.details(), "{}", self);
        } else {
            tracing::debug!(details = %self.details(), "{}", self);
        }

        (status, Json(self.to_envelope())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateUrl {
                message: "Unique constraint violation".to_string(),
                details: json!({ "constraint": db.constraint() }),
            };
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message, json!({ "fields": errors.to_string() }))
    }
}
