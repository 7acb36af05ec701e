//! # Custom Extractors & Validation
//!
//! Helpers that turn a raw JSON body into a validated movie candidate.
//! Handlers accept `Result<Json<Value>, JsonRejection>` so a malformed body
//! becomes a 400 with our own error shape instead of Axum's default
//! rejection response.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use reel_core::{validate_full, validate_partial, MovieId, MoviePatch, NewMovie};
use serde_json::Value;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json(result: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it as a full movie candidate.
pub fn extract_new_movie(result: Result<Json<Value>, JsonRejection>) -> Result<NewMovie, AppError> {
    let candidate = extract_json(result)?;
    Ok(validate_full(&candidate)?)
}

/// Extract a JSON body and validate it as a partial movie candidate.
pub fn extract_movie_patch(
    result: Result<Json<Value>, JsonRejection>,
) -> Result<MoviePatch, AppError> {
    let candidate = extract_json(result)?;
    Ok(validate_partial(&candidate)?)
}

/// Parse a path segment as a movie id. Anything that is not a UUID cannot
/// name a stored movie, so callers treat `None` as "not found".
pub fn parse_movie_id(raw: &str) -> Option<MovieId> {
    raw.parse().ok()
}
