//! # Movies — Catalogue CRUD
//!
//! ## Endpoints
//!
//! - `GET /movies` — list movies, optionally filtered by `?genre=`
//! - `GET /movies/{id}` — get one movie
//! - `POST /movies` — create a movie from a full candidate
//! - `PATCH /movies/{id}` — merge a partial candidate into a movie
//! - `DELETE /movies/{id}` — delete a movie
//!
//! A PATCH naming an unknown id answers 400, not 404, and the body is
//! validated before the id is looked up.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reel_core::Movie;
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::error::{AppError, MessageBody};
use crate::extractors::{extract_movie_patch, extract_new_movie, parse_movie_id};
use crate::state::AppState;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const MOVIE_DELETED: &str = "Movie deleted";

/// Query string accepted by `GET /movies`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Genre name, matched case-insensitively. Empty means no filter.
    pub genre: Option<String>,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the movies router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /movies — List movies in insertion order.
#[utoipa::path(
    get,
    path = "/movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Movies, optionally filtered by genre", body = Vec<Movie>),
    ),
    tag = "movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Json<Vec<Movie>> {
    match query.genre.as_deref() {
        Some(genre) if !genre.is_empty() => Json(state.movies.list_by_genre(genre)),
        _ => Json(state.movies.list()),
    }
}

/// GET /movies/{id} — Get a single movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "Movie not found", body = MessageBody),
    ),
    tag = "movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    parse_movie_id(&id)
        .and_then(|id| state.movies.get(&id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))
}

/// POST /movies — Create a movie.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = reel_core::NewMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Validation error or malformed body", body = crate::error::BadRequestBody),
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let movie = extract_new_movie(body)?;
    let created = state.movies.create(movie);
    tracing::info!(movie_id = %created.id, title = %created.title, "movie created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /movies/{id} — Merge present fields into a movie.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    request_body = reel_core::MoviePatch,
    responses(
        (status = 200, description = "Merged movie", body = Movie),
        (status = 400, description = "Validation error, malformed body, or movie not found", body = crate::error::BadRequestBody),
    ),
    tag = "movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, AppError> {
    let patch = extract_movie_patch(body)?;
    let missing = || AppError::BadRequest(MOVIE_NOT_FOUND.to_string());

    let id = parse_movie_id(&id).ok_or_else(missing)?;
    let updated = state.movies.update(&id, patch).map_err(|err| {
        tracing::debug!(error = %err, "patch target missing");
        missing()
    })?;
    tracing::info!(movie_id = %updated.id, "movie updated");
    Ok(Json(updated))
}

/// DELETE /movies/{id} — Delete a movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie deleted", body = MessageBody),
        (status = 404, description = "Movie not found", body = MessageBody),
    ),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let missing = || AppError::NotFound(MOVIE_NOT_FOUND.to_string());

    let id = parse_movie_id(&id).ok_or_else(missing)?;
    state.movies.delete(&id).map_err(|_| missing())?;
    tracing::info!(movie_id = %id, "movie deleted");
    Ok(Json(MessageBody::new(MOVIE_DELETED)))
}
