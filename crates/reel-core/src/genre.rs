//! # Genre — Fixed Enumeration
//!
//! The only genre values a movie may carry. Wire names are case-sensitive
//! and preserved exactly, including `"Sci-F1"` (with the digit one), which is
//! the accepted value on the wire and must not be "corrected" to `Sci-Fi`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A movie genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-F1")]
    SciF1,
    Crime,
}

impl Genre {
    /// Returns every genre in declaration order.
    pub fn all() -> &'static [Genre] {
        &[
            Self::Action,
            Self::Adventure,
            Self::Comedy,
            Self::Drama,
            Self::Fantasy,
            Self::Horror,
            Self::Thriller,
            Self::SciF1,
            Self::Crime,
        ]
    }

    /// The wire name of this genre. Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Thriller => "Thriller",
            Self::SciF1 => "Sci-F1",
            Self::Crime => "Crime",
        }
    }

    /// Whether `name` spells this genre, ignoring ASCII case.
    ///
    /// Used by genre filtering, which is case-insensitive. Parsing a candidate
    /// (via [`FromStr`]) is not.
    pub fn matches_ignore_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string was not one of the enumerated genre names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0:?}")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
