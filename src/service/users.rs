//! User CRUD and name search.

use crate::error::AppError;
use crate::models::{NewUser, User};
use crate::sql::{search_users_by_name, NameMatch};
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, username, email";

pub async fn create_user(pool: &PgPool, new: &NewUser) -> Result<User, AppError> {
    tracing::debug!(username = %new.username, "insert user");
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id, username, email",
    )
    .bind(&new.username)
    .bind(&new.email)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

/// `None` when no row matches; a missing user is not an error.
pub async fn get_user_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        USER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn get_all_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users ORDER BY id",
        USER_COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// Case-insensitive search against usernames, prefix or substring.
pub async fn get_users_by_name(
    pool: &PgPool,
    fragment: &str,
    mode: NameMatch,
) -> Result<Vec<User>, AppError> {
    let q = search_users_by_name(fragment, mode);
    tracing::debug!(sql = %q.sql, "query");
    let mut query = sqlx::query_as::<_, User>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(pool).await?)
}

/// Replaces all mutable fields. `None` when the id does not exist.
pub async fn update_user(
    pool: &PgPool,
    id: i32,
    new: &NewUser,
) -> Result<Option<User>, AppError> {
    tracing::debug!(id, "update user");
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET username = $1, email = $2 WHERE id = $3 RETURNING id, username, email",
    )
    .bind(&new.username)
    .bind(&new.email)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Idempotent; returns whether a row was actually removed.
pub async fn delete_user(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete user");
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
