//! # Origin Policy
//!
//! A request is accepted when it carries no `Origin` header (same-origin and
//! non-browser clients) or when its `Origin` exactly matches an entry of the
//! configured allow-list. Anything else is rejected with 403 before it reaches
//! a handler, preflight `OPTIONS` included.
//!
//! Accepted cross-origin requests get their CORS response headers from
//! `tower_http::cors::CorsLayer`, built by [`OriginPolicy::cors_layer`].
//!
//! The policy reaches [`origin_middleware`] as a request extension, so the
//! `Extension(policy)` layer must sit outside the middleware.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::AppError;

/// Message returned with a 403 for a disallowed origin.
pub const CORS_REJECTED: &str = "Not allowed by CORS";

/// The set of accepted `Origin` values.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Arc<[String]>,
}

impl OriginPolicy {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// Whether a request with this `Origin` (or none) may proceed.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.iter().any(|a| a == origin),
        }
    }

    /// CORS response layer mirroring the allow-list.
    pub fn cors_layer(&self) -> CorsLayer {
        let allowed = Arc::clone(&self.allowed);
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts: &Parts| {
                    origin
                        .to_str()
                        .map(|o| allowed.iter().any(|a| a == o))
                        .unwrap_or(false)
                },
            ))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Reject requests whose `Origin` is outside the allow-list.
///
/// Without an [`OriginPolicy`] extension every origin is accepted.
pub async fn origin_middleware(request: Request, next: Next) -> Response {
    let Some(policy) = request.extensions().get::<OriginPolicy>().cloned() else {
        return next.run(request).await;
    };

    let allowed = match request.headers().get(header::ORIGIN) {
        None => true,
        Some(value) => match value.to_str() {
            Ok(origin) => policy.allows(Some(origin)),
            Err(_) => false,
        },
    };

    if allowed {
        next.run(request).await
    } else {
        tracing::warn!(
            origin = ?request.headers().get(header::ORIGIN),
            method = %request.method(),
            uri = %request.uri(),
            "origin not in allow-list"
        );
        AppError::Forbidden(CORS_REJECTED.to_string()).into_response()
    }
}
