//! # Startup Bootstrap
//!
//! Builds the [`AppState`] the server runs with. When `MOVIES_SEED` names a
//! file, that file is loaded into the store first.
//!
//! ## Seed File Format
//!
//! A JSON array of movie objects. Each element must carry a UUID `id` and
//! pass the same full validation as `POST /movies` (so `rate` may be
//! omitted and defaults to 5). Ids must be unique. Any bad record aborts
//! startup; nothing is ever written back to the file.

use std::path::Path;

use reel_core::{validate_full, FieldErrors, Movie, MovieId, MovieStore, StoreError};
use serde_json::Value;

use crate::state::{AppConfig, AppState};

/// Errors during startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Seed file is not JSON.
    #[error("seed file {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Seed document is JSON but not an array.
    #[error("seed document must be a JSON array of movies")]
    NotAnArray,

    /// A seed record has no `id`, or one that is not a UUID.
    #[error("seed record {index} has a missing or malformed id")]
    InvalidId { index: usize },

    /// A seed record failed schema validation.
    #[error("seed record {index} is invalid: {errors}")]
    InvalidRecord { index: usize, errors: FieldErrors },

    /// Seed ids collide.
    #[error("seed rejected: {0}")]
    Store(#[from] StoreError),
}

/// Build the application state, seeding the store when configured.
pub fn bootstrap(config: AppConfig) -> Result<AppState, BootstrapError> {
    let store = MovieStore::new();

    match &config.seed_path {
        Some(path) => {
            let movies = load_seed(path)?;
            let count = store.seed(movies)?;
            tracing::info!(count, path = %path.display(), "seeded movie catalogue");
        }
        None => tracing::info!("no seed file configured; starting with an empty catalogue"),
    }

    Ok(AppState::with_store(config, store))
}

/// Read and check a seed file.
pub fn load_seed(path: &Path) -> Result<Vec<Movie>, BootstrapError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| BootstrapError::Read {
        path: display.clone(),
        source,
    })?;
    let document: Value = serde_json::from_str(&raw).map_err(|source| BootstrapError::Parse {
        path: display,
        source,
    })?;
    parse_seed(&document)
}

/// Check an already-parsed seed document.
pub fn parse_seed(document: &Value) -> Result<Vec<Movie>, BootstrapError> {
    let records = document.as_array().ok_or(BootstrapError::NotAnArray)?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .get("id")
                .and_then(Value::as_str)
                .and_then(|raw| raw.parse::<MovieId>().ok())
                .ok_or(BootstrapError::InvalidId { index })?;
            let movie = validate_full(record)
                .map_err(|errors| BootstrapError::InvalidRecord { index, errors })?;
            Ok(Movie::new(id, movie))
        })
        .collect()
}
