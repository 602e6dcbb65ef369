//! Movie CRUD and criteria search.

use crate::error::AppError;
use crate::models::{Movie, NewMovie};
use crate::sql::{search_movies, MovieCriteria};
use sqlx::PgPool;

const MOVIE_COLUMNS: &str = "movie_id, title, genre, release_year, director";

pub async fn create_movie(pool: &PgPool, new: &NewMovie) -> Result<Movie, AppError> {
    tracing::debug!(title = %new.title, "insert movie");
    let movie = sqlx::query_as::<_, Movie>(
        "INSERT INTO movies (title, genre, release_year, director) \
         VALUES ($1, $2, $3, $4) RETURNING movie_id, title, genre, release_year, director",
    )
    .bind(&new.title)
    .bind(&new.genre)
    .bind(new.release_year)
    .bind(&new.director)
    .fetch_one(pool)
    .await?;
    Ok(movie)
}

pub async fn get_movie_by_id(pool: &PgPool, id: i32) -> Result<Option<Movie>, AppError> {
    let movie = sqlx::query_as::<_, Movie>(&format!(
        "SELECT {} FROM movies WHERE movie_id = $1",
        MOVIE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(movie)
}

pub async fn get_all_movies(pool: &PgPool) -> Result<Vec<Movie>, AppError> {
    let movies = sqlx::query_as::<_, Movie>(&format!(
        "SELECT {} FROM movies ORDER BY movie_id",
        MOVIE_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(movies)
}

/// Present criteria are ANDed; an empty criteria set selects every movie.
pub async fn get_movies_matching_criteria(
    pool: &PgPool,
    criteria: &MovieCriteria,
) -> Result<Vec<Movie>, AppError> {
    let q = search_movies(criteria);
    tracing::debug!(sql = %q.sql, "query");
    let mut query = sqlx::query_as::<_, Movie>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn update_movie(
    pool: &PgPool,
    id: i32,
    new: &NewMovie,
) -> Result<Option<Movie>, AppError> {
    tracing::debug!(id, "update movie");
    let movie = sqlx::query_as::<_, Movie>(
        "UPDATE movies SET title = $1, genre = $2, release_year = $3, director = $4 \
         WHERE movie_id = $5 RETURNING movie_id, title, genre, release_year, director",
    )
    .bind(&new.title)
    .bind(&new.genre)
    .bind(new.release_year)
    .bind(&new.director)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(movie)
}

pub async fn delete_movie(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete movie");
    let result = sqlx::query("DELETE FROM movies WHERE movie_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
