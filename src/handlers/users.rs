//! User route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::User;
use crate::response::{created_user, UserEnvelope};
use crate::service::{users, validation};
use crate::sql::NameMatch;
use crate::state::AppState;

/// `username` predates the explicit `starts_with`/`contains` pair and keeps
/// its substring semantics; when several are given the first present one in
/// that order wins.
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub username: Option<String>,
    pub starts_with: Option<String>,
    pub contains: Option<String>,
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UserListQuery>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = if let Some(fragment) = params.username.as_deref() {
        users::get_users_by_name(&state.pool, fragment, NameMatch::Substring).await?
    } else if let Some(fragment) = params.starts_with.as_deref() {
        users::get_users_by_name(&state.pool, fragment, NameMatch::Prefix).await?
    } else if let Some(fragment) = params.contains.as_deref() {
        users::get_users_by_name(&state.pool, fragment, NameMatch::Substring).await?
    } else {
        users::get_all_users(&state.pool).await?
    };
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    let user = users::get_user_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<UserEnvelope>), AppError> {
    let new = validation::user_payload(&body)?;
    let user = users::create_user(&state.pool, &new).await?;
    Ok(created_user(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<User>, AppError> {
    let new = validation::user_payload(&body)?;
    let user = users::update_user(&state.pool, id, &new)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    users::delete_user(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
