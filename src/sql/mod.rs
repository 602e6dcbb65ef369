//! Safe SQL composition: fixed identifiers, values as parameters.

mod builder;
mod params;

pub use builder::{search_movies, search_users_by_name, MovieCriteria, NameMatch, QueryBuf};
pub use params::BindValue;
