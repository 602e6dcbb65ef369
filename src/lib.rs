//! Movie-rating REST service: axum routes over PostgreSQL CRUD.

pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{api_routes, app, connection_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables};
