//! # Schema Validation
//!
//! Checks an unvalidated JSON candidate against the movie schema.
//!
//! The schema is a small rule table: one [`FieldRule`] per wire field, each
//! naming the field, the message used when a mandatory field is absent, and a
//! check that either normalizes the value or lists its violations.
//! [`validate_full`] and [`validate_partial`] run the same table; they differ
//! only in how absence is treated.
//!
//! Fields are checked independently and every violation is collected, so a
//! single response can tell a caller about all of its mistakes at once.
//! Keys outside the table (including `id`) are ignored.

use serde_json::{Map, Value};

use crate::error::{ErrorCode, FieldError, FieldErrors};
use crate::genre::Genre;
use crate::movie::{MoviePatch, NewMovie};

pub const YEAR_MIN: i32 = 1800;
pub const YEAR_MAX: i32 = 2025;
pub const RATE_MIN: f64 = 0.0;
pub const RATE_MAX: f64 = 10.0;
/// Rate given to a created movie whose candidate omits one.
pub const DEFAULT_RATE: f64 = 5.0;
pub const POSTER_SUFFIX: &str = ".jpg";

/// Pseudo-field reported when the candidate is not a JSON object at all.
pub const BODY_FIELD: &str = "body";

/// Validate a candidate for creation.
///
/// Every field except `rate` is mandatory; `rate` falls back to
/// [`DEFAULT_RATE`].
pub fn validate_full(candidate: &Value) -> Result<NewMovie, FieldErrors> {
    let mut c = Candidate::open(candidate, Mode::Full)?;

    let title = c.check(&TITLE);
    let year = c.check(&YEAR);
    let director = c.check(&DIRECTOR);
    let rate = c.check(&RATE);
    let poster = c.check(&POSTER);
    let genre = c.check(&GENRE);

    match (title, year, director, poster, genre) {
        (Some(title), Some(year), Some(director), Some(poster), Some(genre))
            if c.errors.is_empty() =>
        {
            Ok(NewMovie {
                title,
                year,
                director,
                rate: rate.unwrap_or(DEFAULT_RATE),
                poster,
                genre,
            })
        }
        _ => Err(c.errors),
    }
}

/// Validate a candidate for a partial update.
///
/// Only fields present in the candidate are checked. An empty object is
/// valid and yields an empty patch. No defaults are applied.
pub fn validate_partial(candidate: &Value) -> Result<MoviePatch, FieldErrors> {
    let mut c = Candidate::open(candidate, Mode::Partial)?;

    let patch = MoviePatch {
        title: c.check(&TITLE),
        year: c.check(&YEAR),
        director: c.check(&DIRECTOR),
        rate: c.check(&RATE),
        poster: c.check(&POSTER),
        genre: c.check(&GENRE),
    };
    c.errors.into_result(|| patch)
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// A single problem with a present value.
struct Violation {
    code: ErrorCode,
    message: String,
}

fn violation(code: ErrorCode, message: impl Into<String>) -> Vec<Violation> {
    vec![Violation {
        code,
        message: message.into(),
    }]
}

type Check<T> = fn(&Value) -> Result<T, Vec<Violation>>;

struct FieldRule<T> {
    name: &'static str,
    /// Message when the field is absent from a full candidate. `None` means
    /// the field is optional even there.
    required: Option<&'static str>,
    check: Check<T>,
}

const TITLE: FieldRule<String> = FieldRule {
    name: "title",
    required: Some("movie title is required"),
    check: check_title,
};

const YEAR: FieldRule<i32> = FieldRule {
    name: "year",
    required: Some("year is required"),
    check: check_year,
};

const DIRECTOR: FieldRule<String> = FieldRule {
    name: "director",
    required: Some("director is required"),
    check: check_director,
};

const RATE: FieldRule<f64> = FieldRule {
    name: "rate",
    required: None,
    check: check_rate,
};

const POSTER: FieldRule<String> = FieldRule {
    name: "poster",
    required: Some("poster is required"),
    check: check_poster,
};

const GENRE: FieldRule<Vec<Genre>> = FieldRule {
    name: "genre",
    required: Some("movie genre is required"),
    check: check_genre,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Partial,
}

/// A candidate object being checked, with the violations found so far.
struct Candidate<'a> {
    fields: &'a Map<String, Value>,
    mode: Mode,
    errors: FieldErrors,
}

impl<'a> Candidate<'a> {
    fn open(candidate: &'a Value, mode: Mode) -> Result<Self, FieldErrors> {
        match candidate.as_object() {
            Some(fields) => Ok(Self {
                fields,
                mode,
                errors: FieldErrors::new(),
            }),
            None => Err(FieldErrors::from(vec![FieldError::new(
                BODY_FIELD,
                ErrorCode::InvalidType,
                format!("expected a JSON object, received {}", type_name(candidate)),
            )])),
        }
    }

    /// Run one rule, recording its violations. Returns the normalized value
    /// when the field is present and valid.
    fn check<T>(&mut self, rule: &FieldRule<T>) -> Option<T> {
        let Some(value) = self.fields.get(rule.name) else {
            if let (Mode::Full, Some(message)) = (self.mode, rule.required) {
                self.errors
                    .push(FieldError::new(rule.name, ErrorCode::Required, message));
            }
            return None;
        };
        match (rule.check)(value) {
            Ok(normalized) => Some(normalized),
            Err(violations) => {
                for v in violations {
                    self.errors.push(FieldError::new(rule.name, v.code, v.message));
                }
                None
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

fn check_title(value: &Value) -> Result<String, Vec<Violation>> {
    let title = value.as_str().ok_or_else(|| {
        violation(
            ErrorCode::InvalidType,
            format!("movie title must be a string, received {}", type_name(value)),
        )
    })?;
    if title.is_empty() {
        return Err(violation(ErrorCode::Empty, "movie title must not be empty"));
    }
    Ok(title.to_string())
}

fn check_year(value: &Value) -> Result<i32, Vec<Violation>> {
    let year = value.as_f64().ok_or_else(|| {
        violation(
            ErrorCode::InvalidType,
            format!("year must be a number, received {}", type_name(value)),
        )
    })?;
    if year.fract() != 0.0 {
        return Err(violation(ErrorCode::InvalidType, "year must be an integer"));
    }
    if year < f64::from(YEAR_MIN) {
        return Err(violation(
            ErrorCode::TooSmall,
            format!("year must be at least {YEAR_MIN}"),
        ));
    }
    if year > f64::from(YEAR_MAX) {
        return Err(violation(
            ErrorCode::TooBig,
            format!("year must be at most {YEAR_MAX}"),
        ));
    }
    // In range, so the cast is exact.
    Ok(year as i32)
}

fn check_director(value: &Value) -> Result<String, Vec<Violation>> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        violation(
            ErrorCode::InvalidType,
            format!("director must be a string, received {}", type_name(value)),
        )
    })
}

fn check_rate(value: &Value) -> Result<f64, Vec<Violation>> {
    let rate = value.as_f64().ok_or_else(|| {
        violation(
            ErrorCode::InvalidType,
            format!("rate must be a number, received {}", type_name(value)),
        )
    })?;
    if rate < RATE_MIN {
        return Err(violation(
            ErrorCode::TooSmall,
            format!("rate must be at least {RATE_MIN}"),
        ));
    }
    if rate > RATE_MAX {
        return Err(violation(
            ErrorCode::TooBig,
            format!("rate must be at most {RATE_MAX}"),
        ));
    }
    Ok(rate)
}

/// A poster must parse as an absolute URL, and both the raw text and the
/// URL path must end in [`POSTER_SUFFIX`]. Both problems are reported when
/// both apply.
fn check_poster(value: &Value) -> Result<String, Vec<Violation>> {
    let poster = value.as_str().ok_or_else(|| {
        violation(
            ErrorCode::InvalidType,
            format!("poster must be a string, received {}", type_name(value)),
        )
    })?;

    let mut violations = Vec::new();
    let path_ok = match url::Url::parse(poster) {
        Ok(parsed) => parsed.path().ends_with(POSTER_SUFFIX),
        Err(_) => {
            violations.extend(violation(ErrorCode::InvalidUrl, "poster must be a URL"));
            true
        }
    };
    if !poster.ends_with(POSTER_SUFFIX) || !path_ok {
        violations.extend(violation(
            ErrorCode::InvalidSuffix,
            format!("poster must end with \"{POSTER_SUFFIX}\""),
        ));
    }

    if violations.is_empty() {
        Ok(poster.to_string())
    } else {
        Err(violations)
    }
}

fn check_genre(value: &Value) -> Result<Vec<Genre>, Vec<Violation>> {
    let items = value.as_array().ok_or_else(|| {
        violation(
            ErrorCode::InvalidType,
            format!(
                "movie genre must be a list of genres, received {}",
                type_name(value)
            ),
        )
    })?;
    if items.is_empty() {
        return Err(violation(
            ErrorCode::Empty,
            "movie genre must list at least one genre",
        ));
    }

    let mut genres = Vec::with_capacity(items.len());
    let mut violations = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(name) = item.as_str() else {
            violations.extend(violation(
                ErrorCode::InvalidType,
                format!(
                    "movie genres must be of type Genre; element {index} is {}",
                    type_name(item)
                ),
            ));
            continue;
        };
        match name.parse::<Genre>() {
            Ok(genre) => genres.push(genre),
            Err(_) => violations.extend(violation(
                ErrorCode::InvalidEnumValue,
                format!(
                    "invalid genre {name:?} at element {index}; expected one of {}",
                    expected_genres()
                ),
            )),
        }
    }

    if violations.is_empty() {
        Ok(genres)
    } else {
        Err(violations)
    }
}

fn expected_genres() -> String {
    Genre::all()
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
