//! Connection probe.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ConnectionBody {
    status: &'static str,
}

/// Round-trips `SELECT 1`; a failure surfaces as a database error (500).
async fn connection(State(state): State<AppState>) -> Result<Json<ConnectionBody>, AppError> {
    sqlx::query("SELECT 1").fetch_optional(&state.pool).await?;
    Ok(Json(ConnectionBody { status: "ok" }))
}

pub fn connection_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/connection", get(connection))
        .with_state(state)
}
