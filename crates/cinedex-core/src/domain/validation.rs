//! Caller-side validation rules.
//!
//! Storage backends do not re-validate; everything that reaches a store has
//! passed through here first (service layer or CLI input handling).

use crate::domain::error::DomainError;
use crate::domain::movie::{Movie, RATING_MAX, RATING_MIN};

/// Centralized domain validation (associated functions only, no state).
pub struct DomainValidator;

impl DomainValidator {
    /// A rating must lie in [0.0, 10.0]. Both bounds are accepted.
    pub fn validate_rating(rating: f64) -> Result<(), DomainError> {
        if !rating.is_finite() || rating < RATING_MIN || rating > RATING_MAX {
            return Err(DomainError::RatingOutOfRange { rating });
        }
        Ok(())
    }

    /// Titles are keys and must be non-empty after trimming.
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        Ok(())
    }

    /// Full record check used before any `add` reaches a store.
    pub fn validate_movie(movie: &Movie) -> Result<(), DomainError> {
        Self::validate_title(&movie.title)?;
        Self::validate_rating(movie.rating)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_ratings_are_accepted() {
        assert!(DomainValidator::validate_rating(0.0).is_ok());
        assert!(DomainValidator::validate_rating(10.0).is_ok());
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert!(DomainValidator::validate_rating(-0.1).is_err());
        assert!(DomainValidator::validate_rating(10.1).is_err());
    }

    #[test]
    fn nan_is_rejected() {
        assert!(DomainValidator::validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(DomainValidator::validate_title("").is_err());
        assert!(DomainValidator::validate_title("   ").is_err());
        assert!(DomainValidator::validate_title("Dune").is_ok());
    }

    #[test]
    fn validate_movie_checks_both_fields() {
        assert!(DomainValidator::validate_movie(&Movie::new("Dune", 2021, 8.0, "")).is_ok());
        assert!(DomainValidator::validate_movie(&Movie::new("", 2021, 8.0, "")).is_err());
        assert!(DomainValidator::validate_movie(&Movie::new("Dune", 2021, 12.0, "")).is_err());
    }
}
