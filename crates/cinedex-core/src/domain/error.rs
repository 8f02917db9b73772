// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("rating {rating} is outside the accepted range 0.0 - 10.0")]
    RatingOutOfRange { rating: f64 },

    #[error("movie title must not be empty")]
    EmptyTitle,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RatingOutOfRange { rating } => vec![
                format!("You entered: {}", rating),
                "Ratings must be between 0.0 and 10.0 inclusive".into(),
                "Example: cinedex update \"Dune\" 8.5".into(),
            ],
            Self::EmptyTitle => vec![
                "Provide a non-empty movie title".into(),
                "Example: cinedex add \"Inception\"".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RatingOutOfRange { .. } | Self::EmptyTitle => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_error_mentions_range() {
        let err = DomainError::RatingOutOfRange { rating: 10.1 };
        assert!(err.to_string().contains("0.0 - 10.0"));
        assert!(err.suggestions().iter().any(|s| s.contains("10.0")));
    }

    #[test]
    fn all_variants_are_validation() {
        assert_eq!(DomainError::EmptyTitle.category(), ErrorCategory::Validation);
    }
}
