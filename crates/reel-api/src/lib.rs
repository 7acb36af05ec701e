//! # reel-api — Axum Movie Service
//!
//! HTTP surface over the in-memory movie catalogue in `reel-core`, built on
//! Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `GET /` — greeting
//! - `/movies`, `/movies/{id}` — catalogue CRUD
//! - `/openapi.json` — generated OpenAPI document
//! - `/health/*` — liveness/readiness probes (outside the origin check)
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → OriginPolicy extension → origin check → CorsLayer
//!
//! ## Crate Policy
//!
//! - Validation and storage live in `reel-core`; handlers only translate.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::MessageBody;
use crate::middleware::origin::{origin_middleware, OriginPolicy};
use crate::middleware::tracing_layer;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the origin check so
/// orchestrators can reach them without an `Origin` header in the list.
pub fn app(state: AppState) -> Router {
    let policy = OriginPolicy::new(state.config.allowed_origins.iter().cloned());

    let api = Router::new()
        .route("/", get(root))
        .merge(routes::movies::router())
        .merge(openapi::router())
        .layer(policy.cors_layer())
        .layer(from_fn(origin_middleware))
        .layer(axum::Extension(policy))
        .layer(tracing_layer::layer())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// GET / — Greeting.
async fn root() -> Json<MessageBody> {
    Json(MessageBody::new("Hello world"))
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the store lives in memory, so the service is ready as
/// soon as it is listening.
async fn readiness() -> &'static str {
    "ready"
}
