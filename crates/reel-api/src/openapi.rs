//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented movie routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the movie API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "reel API",
        version = "0.1.0",
        description = "In-memory movie catalogue: list, filter by genre, create, partially update, and delete movies.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::movies::list_movies,
        crate::routes::movies::get_movie,
        crate::routes::movies::create_movie,
        crate::routes::movies::update_movie,
        crate::routes::movies::delete_movie,
    ),
    components(schemas(
        reel_core::Movie,
        reel_core::MovieId,
        reel_core::NewMovie,
        reel_core::MoviePatch,
        reel_core::Genre,
        reel_core::FieldError,
        reel_core::FieldErrors,
        reel_core::ErrorCode,
        crate::error::MessageBody,
        crate::error::ValidationErrorBody,
        crate::error::BadRequestBody,
    )),
    tags(
        (name = "movies", description = "Movie catalogue"),
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
