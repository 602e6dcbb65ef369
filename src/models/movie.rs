use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identity key is `movie_id` on the wire and in storage, unlike users
/// which use a plain `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub movie_id: i32,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
}
