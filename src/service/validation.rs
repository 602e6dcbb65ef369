//! Request body validation: loose JSON in, typed payloads out.

use crate::error::AppError;
use crate::models::{NewMovie, NewRating, NewUser};
use serde_json::Value;

const RATING_MIN: f64 = 0.0;
const RATING_MAX: f64 = 5.0;

fn require_str(body: &Value, field: &str) -> Result<String, AppError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

fn require_nonempty_str(body: &Value, field: &str) -> Result<String, AppError> {
    let s = require_str(body, field)?;
    if s.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(s)
}

fn require_i32(body: &Value, field: &str) -> Result<i32, AppError> {
    match body.get(field) {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| AppError::Validation(format!("{} must be an integer", field))),
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
        Some(_) => Err(AppError::Validation(format!("{} must be an integer", field))),
    }
}

fn require_f64(body: &Value, field: &str) -> Result<f64, AppError> {
    match body.get(field) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| AppError::Validation(format!("{} must be a number", field))),
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
        Some(_) => Err(AppError::Validation(format!("{} must be a number", field))),
    }
}

/// Build a user payload. Email check matches the original contract: just the
/// bare shape of an address, nothing RFC-grade.
pub fn user_payload(body: &Value) -> Result<NewUser, AppError> {
    let username = require_nonempty_str(body, "username")?;
    let email = require_nonempty_str(body, "email")?;
    if !email.contains('@') || email.len() < 3 {
        return Err(AppError::Validation("email must be a valid email".into()));
    }
    Ok(NewUser { username, email })
}

pub fn movie_payload(body: &Value) -> Result<NewMovie, AppError> {
    Ok(NewMovie {
        title: require_nonempty_str(body, "title")?,
        genre: require_nonempty_str(body, "genre")?,
        release_year: require_i32(body, "release_year")?,
        director: require_nonempty_str(body, "director")?,
    })
}

/// Build a rating payload. `date` is kept verbatim, mixed formats and all.
pub fn rating_payload(body: &Value) -> Result<NewRating, AppError> {
    let rating = require_f64(body, "rating")?;
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::Validation(format!(
            "rating must be between {} and {}",
            RATING_MIN, RATING_MAX
        )));
    }
    Ok(NewRating {
        user_id: require_i32(body, "user_id")?,
        movie_id: require_i32(body, "movie_id")?,
        rating,
        review: require_str(body, "review")?,
        date: require_str(body, "date")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_payload_requires_email() {
        let err = user_payload(&json!({"username": "test_user"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn user_payload_rejects_mailless_email() {
        let body = json!({"username": "test_user", "email": "not-an-address"});
        assert!(user_payload(&body).is_err());
    }

    #[test]
    fn user_payload_accepts_valid_body() {
        let body = json!({"username": "test_user", "email": "testuser@example.com"});
        let new = user_payload(&body).unwrap();
        assert_eq!(new.username, "test_user");
        assert_eq!(new.email, "testuser@example.com");
    }

    #[test]
    fn movie_payload_requires_integer_year() {
        let body = json!({
            "title": "test_movie",
            "genre": "test_genre",
            "release_year": "2024",
            "director": "Test Director"
        });
        assert!(movie_payload(&body).is_err());
    }

    #[test]
    fn rating_payload_rejects_out_of_range() {
        let body = json!({
            "user_id": 1, "movie_id": 2, "rating": 5.5,
            "review": "too good", "date": "3/3/2024"
        });
        assert!(rating_payload(&body).is_err());
    }

    #[test]
    fn rating_payload_keeps_date_verbatim() {
        for date in ["03/03/2024", "3/3/2024"] {
            let body = json!({
                "user_id": 1, "movie_id": 2, "rating": 4.5,
                "review": "Great movie!", "date": date
            });
            assert_eq!(rating_payload(&body).unwrap().date, date);
        }
    }

    #[test]
    fn rating_payload_accepts_integral_rating() {
        let body = json!({
            "user_id": 1, "movie_id": 2, "rating": 5,
            "review": "Great movie!", "date": "3/3/2024"
        });
        assert_eq!(rating_payload(&body).unwrap().rating, 5.0);
    }
}
