//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! Two body shapes reach clients:
//!
//! - `{"message": "..."}` for lookups, malformed bodies, and origin rejections.
//! - `{"error": [{"field", "code", "message"}, ...]}` for schema violations,
//!   carrying every [`FieldError`](reel_core::FieldError) found.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reel_core::FieldErrors;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// `{"message": ...}` body used by plain-text outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": [...]}` body returned when a candidate fails validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub error: FieldErrors,
}

/// Either 400 body shape. Documentation only: routes that can answer a 400
/// both for a malformed or unknown target and for a rejected candidate
/// reference this schema.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BadRequestBody {
    Validation(ValidationErrorBody),
    Message(MessageBody),
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Candidate failed schema validation (400).
    #[error("validation error: {0}")]
    Validation(#[from] FieldErrors),

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body could not be parsed, or a PATCH named an unknown id (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Origin outside the allow-list (403).
    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Validation(errors) => {
                tracing::debug!(violations = errors.len(), error = %self, "rejected candidate")
            }
            Self::Forbidden(_) => tracing::warn!(error = %self, "request rejected"),
            _ => tracing::debug!(error = %self, "client error"),
        }

        match self {
            Self::Validation(errors) => {
                (status, Json(ValidationErrorBody { error: errors })).into_response()
            }
            Self::NotFound(message) | Self::BadRequest(message) | Self::Forbidden(message) => {
                (status, Json(MessageBody { message })).into_response()
            }
        }
    }
}
