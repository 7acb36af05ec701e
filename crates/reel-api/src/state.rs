//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor, plus the environment-driven [`AppConfig`].

use std::path::PathBuf;
use std::sync::Arc;

use reel_core::MovieStore;

/// Listen port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 3000;

/// Origins accepted when `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:1234",
    "https://movies.com",
];

/// Log line format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Exact `Origin` values accepted for cross-origin requests.
    pub allowed_origins: Vec<String>,
    /// JSON array of movies loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            seed_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `PORT` | 3000 |
    /// | `CORS_ALLOWED_ORIGINS` | [`DEFAULT_ALLOWED_ORIGINS`] |
    /// | `MOVIES_SEED` | unset |
    /// | `LOG_FORMAT` | text |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or(defaults.allowed_origins);

        let seed_path = lookup("MOVIES_SEED")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_format = lookup("LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Self {
            port,
            allowed_origins,
            seed_path,
            log_format,
        }
    }
}

/// Split a comma-separated origin list, trimming blanks and dropping empties.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shared application state passed to all route handlers.
///
/// Cheaply cloneable: the store is a shared handle and the config is
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub movies: MovieStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Empty store, default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Empty store with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_store(config, MovieStore::new())
    }

    pub fn with_store(config: AppConfig, movies: MovieStore) -> Self {
        Self {
            movies,
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
