//! # Movie Records
//!
//! [`Movie`] is the stored record. [`NewMovie`] and [`MoviePatch`] are the
//! normalized outputs of [`validate_full`](crate::validate_full) and
//! [`validate_partial`](crate::validate_partial); the store only accepts
//! these, so an unvalidated payload can never reach it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::genre::Genre;

/// Identifier of a stored movie. Random (UUID v4), assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct MovieId(Uuid);

impl MovieId {
    /// Create a new random movie identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MovieId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub rate: f64,
    /// Absolute URL of a `.jpg` poster.
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Assemble a record from a validated candidate.
    pub fn new(id: MovieId, movie: NewMovie) -> Self {
        Self {
            id,
            title: movie.title,
            year: movie.year,
            director: movie.director,
            rate: movie.rate,
            poster: movie.poster,
            genre: movie.genre,
        }
    }

    /// Overwrite every field present in `patch`; leave the rest, and the id,
    /// untouched.
    pub fn apply(&mut self, patch: MoviePatch) {
        let MoviePatch {
            title,
            year,
            director,
            rate,
            poster,
            genre,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(year) = year {
            self.year = year;
        }
        if let Some(director) = director {
            self.director = director;
        }
        if let Some(rate) = rate {
            self.rate = rate;
        }
        if let Some(poster) = poster {
            self.poster = poster;
        }
        if let Some(genre) = genre {
            self.genre = genre;
        }
    }

    /// Whether any of this movie's genres spells `name`, ignoring case.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|g| g.matches_ignore_case(name))
    }
}

/// A fully validated candidate, with defaults applied. Carries no id.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Defaults to 5 when the candidate omits it.
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A validated partial candidate. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.rate.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
    }
}
