//! REST routes for users, movies, and ratings.

use crate::handlers::{movies, ratings, users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/api/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/api/movies/:id/ratings",
            get(ratings::list_ratings_for_movie),
        )
        .route(
            "/api/ratings",
            get(ratings::list_ratings).post(ratings::create_rating),
        )
        .route(
            "/api/ratings/:id",
            get(ratings::get_rating)
                .put(ratings::update_rating)
                .delete(ratings::delete_rating),
        )
        .with_state(state)
}
