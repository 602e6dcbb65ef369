//! Rating route handlers, including the per-movie listing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::Rating;
use crate::response::{created_rating, RatingEnvelope, RatingsList};
use crate::service::{ratings, validation};
use crate::state::AppState;

pub async fn list_ratings(State(state): State<AppState>) -> Result<Json<Vec<Rating>>, AppError> {
    Ok(Json(ratings::get_all_ratings(&state.pool).await?))
}

/// GET /api/movies/{id}/ratings. A movie with no ratings (or no such movie)
/// yields an empty list, not a 404.
pub async fn list_ratings_for_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<Json<RatingsList>, AppError> {
    let ratings = ratings::get_ratings_by_movie(&state.pool, movie_id).await?;
    Ok(Json(RatingsList { ratings }))
}

pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Rating>, AppError> {
    let rating = ratings::get_rating_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("rating {}", id)))?;
    Ok(Json(rating))
}

pub async fn create_rating(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<RatingEnvelope>), AppError> {
    let new = validation::rating_payload(&body)?;
    let rating = ratings::create_rating(&state.pool, &new).await?;
    Ok(created_rating(rating))
}

pub async fn update_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<Rating>, AppError> {
    let new = validation::rating_payload(&body)?;
    let rating = ratings::update_rating(&state.pool, id, &new)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("rating {}", id)))?;
    Ok(Json(rating))
}

pub async fn delete_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    ratings::delete_rating(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
