//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.
//! - [`origin`]: origin allow-list enforcement and the CORS response layer.

pub mod origin;
pub mod tracing_layer;
