//! Movie route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::Movie;
use crate::response::{created_movie, MovieEnvelope};
use crate::service::{movies, validation};
use crate::sql::MovieCriteria;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    pub genre: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
}

impl From<MovieListQuery> for MovieCriteria {
    fn from(q: MovieListQuery) -> Self {
        MovieCriteria {
            genre: q.genre,
            director: q.director,
            year: q.year,
        }
    }
}

/// With no query parameters the empty criteria set lists every movie.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = movies::get_movies_matching_criteria(&state.pool, &params.into()).await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Movie>, AppError> {
    let movie = movies::get_movie_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;
    Ok(Json(movie))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MovieEnvelope>), AppError> {
    let new = validation::movie_payload(&body)?;
    let movie = movies::create_movie(&state.pool, &new).await?;
    Ok(created_movie(movie))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<Movie>, AppError> {
    let new = validation::movie_payload(&body)?;
    let movie = movies::update_movie(&state.pool, id, &new)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    movies::delete_movie(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
