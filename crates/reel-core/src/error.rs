//! # Error Types
//!
//! Two failure kinds exist in the catalogue core:
//!
//! - [`FieldErrors`] — a candidate movie failed validation. Carries one
//!   [`FieldError`] per violation so callers can render per-field messages.
//! - [`StoreError`] — a store lookup found no record, or seeding met an id
//!   that is already taken.
//!
//! Both are recoverable; neither is ever a server fault.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::movie::MovieId;

/// Machine-readable classification of a single field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A mandatory field was absent.
    Required,
    /// The value had the wrong JSON type (including `null`).
    InvalidType,
    /// A number below the field's minimum.
    TooSmall,
    /// A number above the field's maximum.
    TooBig,
    /// An empty string or sequence where content is required.
    Empty,
    /// Not a well-formed absolute URL.
    InvalidUrl,
    /// Text that does not end with the required suffix.
    InvalidSuffix,
    /// A value outside a fixed enumeration.
    InvalidEnumValue,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidType => "invalid_type",
            Self::TooSmall => "too_small",
            Self::TooBig => "too_big",
            Self::Empty => "empty",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidSuffix => "invalid_suffix",
            Self::InvalidEnumValue => "invalid_enum_value",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violation on one field of a candidate movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field name as it appears on the wire (`"year"`, `"genre"`, …).
    pub field: String,
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in a candidate, in field order.
///
/// Serializes as a plain JSON array of [`FieldError`] objects. Never empty
/// when returned as an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Whether any violation was reported for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Messages reported for `field`, in the order they were found.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// `Ok(value)` when nothing was reported, `Err(self)` otherwise.
    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid movie: ")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Errors from [`MovieStore`](crate::MovieStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries this id.
    #[error("movie {0} not found")]
    NotFound(MovieId),

    /// A seeded record reuses an id already present.
    #[error("duplicate movie id {0}")]
    DuplicateId(MovieId),
}
