use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub rating_id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: f64,
    pub review: String,
    /// Stored verbatim; the upstream data mixes formats ("03/03/2024",
    /// "3/3/2024"), so no canonical form is enforced.
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRating {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: f64,
    pub review: String,
    pub date: String,
}
