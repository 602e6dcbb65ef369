//! Builds the parameterized SELECTs whose WHERE clause depends on the request.
//!
//! Plain CRUD statements live next to their service functions; only the
//! username search and the movie criteria search need dynamic composition.

use crate::sql::params::BindValue;

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter and returns its `$n` placeholder.
    fn push_param(&mut self, v: BindValue) -> String {
        self.params.push(v);
        format!("${}", self.params.len())
    }
}

/// How a username fragment is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Prefix,
    Substring,
}

impl NameMatch {
    /// ILIKE pattern for `fragment`. The fragment is spliced in unescaped,
    /// so a literal `%` keeps its wildcard meaning and an empty fragment
    /// matches every row.
    pub fn pattern(self, fragment: &str) -> String {
        match self {
            NameMatch::Prefix => format!("{}%", fragment),
            NameMatch::Substring => format!("%{}%", fragment),
        }
    }
}

/// Case-insensitive username search, prefix or substring.
pub fn search_users_by_name(fragment: &str, mode: NameMatch) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::Text(mode.pattern(fragment)));
    q.sql = format!(
        "SELECT id, username, email FROM users WHERE username ILIKE {} ORDER BY id",
        ph
    );
    q
}

/// Optional movie filters; a `None` field is unconstrained. Present fields
/// are ANDed, no fields selects every movie.
#[derive(Debug, Clone, Default)]
pub struct MovieCriteria {
    pub genre: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
}

pub fn search_movies(criteria: &MovieCriteria) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    if let Some(genre) = &criteria.genre {
        let ph = q.push_param(BindValue::Text(genre.clone()));
        where_parts.push(format!("genre = {}", ph));
    }
    if let Some(director) = &criteria.director {
        let ph = q.push_param(BindValue::Text(director.clone()));
        where_parts.push(format!("director = {}", ph));
    }
    if let Some(year) = criteria.year {
        let ph = q.push_param(BindValue::Int(year));
        where_parts.push(format!("release_year = {}", ph));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT movie_id, title, genre, release_year, director FROM movies{} ORDER BY movie_id",
        where_clause
    );
    q
}
