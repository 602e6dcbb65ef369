//! Response envelopes for create operations and the per-movie ratings list.
//!
//! Single-entity reads and list reads return bare JSON; only creates wrap the
//! entity under its type name, and the per-movie listing wraps under
//! `ratings`.

use crate::models::{Movie, Rating, User};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct UserEnvelope {
    pub user: User,
}

#[derive(Serialize)]
pub struct MovieEnvelope {
    pub movie: Movie,
}

#[derive(Serialize)]
pub struct RatingEnvelope {
    pub rating: Rating,
}

#[derive(Serialize)]
pub struct RatingsList {
    pub ratings: Vec<Rating>,
}

pub fn created_user(user: User) -> (StatusCode, Json<UserEnvelope>) {
    (StatusCode::CREATED, Json(UserEnvelope { user }))
}

pub fn created_movie(movie: Movie) -> (StatusCode, Json<MovieEnvelope>) {
    (StatusCode::CREATED, Json(MovieEnvelope { movie }))
}

pub fn created_rating(rating: Rating) -> (StatusCode, Json<RatingEnvelope>) {
    (StatusCode::CREATED, Json(RatingEnvelope { rating }))
}
