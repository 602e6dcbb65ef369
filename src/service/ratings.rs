//! Rating CRUD and the per-movie listing.

use crate::error::AppError;
use crate::models::{NewRating, Rating};
use sqlx::PgPool;

const RATING_COLUMNS: &str = "rating_id, user_id, movie_id, rating, review, date";

/// Fails with a foreign-key violation from storage when `user_id` or
/// `movie_id` does not reference an existing row.
pub async fn create_rating(pool: &PgPool, new: &NewRating) -> Result<Rating, AppError> {
    tracing::debug!(user_id = new.user_id, movie_id = new.movie_id, "insert rating");
    let rating = sqlx::query_as::<_, Rating>(
        "INSERT INTO ratings (user_id, movie_id, rating, review, date) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING rating_id, user_id, movie_id, rating, review, date",
    )
    .bind(new.user_id)
    .bind(new.movie_id)
    .bind(new.rating)
    .bind(&new.review)
    .bind(&new.date)
    .fetch_one(pool)
    .await?;
    Ok(rating)
}

pub async fn get_rating_by_id(pool: &PgPool, id: i32) -> Result<Option<Rating>, AppError> {
    let rating = sqlx::query_as::<_, Rating>(&format!(
        "SELECT {} FROM ratings WHERE rating_id = $1",
        RATING_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(rating)
}

pub async fn get_all_ratings(pool: &PgPool) -> Result<Vec<Rating>, AppError> {
    let ratings = sqlx::query_as::<_, Rating>(&format!(
        "SELECT {} FROM ratings ORDER BY rating_id",
        RATING_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(ratings)
}

/// Ratings for one movie in creation order (rating_id ascending).
pub async fn get_ratings_by_movie(pool: &PgPool, movie_id: i32) -> Result<Vec<Rating>, AppError> {
    let ratings = sqlx::query_as::<_, Rating>(&format!(
        "SELECT {} FROM ratings WHERE movie_id = $1 ORDER BY rating_id",
        RATING_COLUMNS
    ))
    .bind(movie_id)
    .fetch_all(pool)
    .await?;
    Ok(ratings)
}

pub async fn update_rating(
    pool: &PgPool,
    id: i32,
    new: &NewRating,
) -> Result<Option<Rating>, AppError> {
    tracing::debug!(id, "update rating");
    let rating = sqlx::query_as::<_, Rating>(
        "UPDATE ratings SET user_id = $1, movie_id = $2, rating = $3, review = $4, date = $5 \
         WHERE rating_id = $6 \
         RETURNING rating_id, user_id, movie_id, rating, review, date",
    )
    .bind(new.user_id)
    .bind(new.movie_id)
    .bind(new.rating)
    .bind(&new.review)
    .bind(&new.date)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(rating)
}

pub async fn delete_rating(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete rating");
    let result = sqlx::query("DELETE FROM ratings WHERE rating_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
