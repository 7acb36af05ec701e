//! # reel-core — Movie Records for the reel Catalogue
//!
//! Everything the HTTP layer needs to accept, check, and keep movie records,
//! with no transport concerns:
//!
//! - [`validation`] — turns an unvalidated JSON candidate into a normalized
//!   [`NewMovie`] or [`MoviePatch`], or a structured [`FieldErrors`] list.
//! - [`store`] — the [`MovieStore`], an insertion-ordered in-memory collection
//!   shared behind a lock.
//! - [`genre`] — the fixed [`Genre`] enumeration.
//! - [`movie`] — the [`Movie`] record and its identifier.
//!
//! ## Crate Policy
//!
//! - No HTTP, no I/O. Validation is a pure function of its input.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every record held by a [`MovieStore`] passed full validation on the way in.

pub mod error;
pub mod genre;
pub mod movie;
pub mod store;
pub mod validation;

pub use error::{ErrorCode, FieldError, FieldErrors, StoreError};
pub use genre::Genre;
pub use movie::{Movie, MovieId, MoviePatch, NewMovie};
pub use store::MovieStore;
pub use validation::{validate_full, validate_partial};
