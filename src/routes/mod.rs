//! Router wiring.

mod api;
mod common;

pub use api::api_routes;
pub use common::connection_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The complete application router: connection probe plus entity routes,
/// behind a request body size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(connection_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
