//! Application layer errors.
//!
//! These errors represent failures in orchestration and infrastructure,
//! not business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A stored row or document could not be parsed back into records.
    /// Surfaces as a hard failure of `list_movies` for that backend.
    #[error("Parse error in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// Reading or writing the backing file failed.
    #[error("Storage I/O error at {path}: {reason}")]
    StorageIo { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Movie store error")]
    StoreLockError,

    /// The metadata lookup failed at the transport level (the "title not
    /// found upstream" case is `Ok(None)` on the port, not an error).
    #[error("Metadata lookup failed: {reason}")]
    Network { reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// A gallery asset (template or stylesheet) is missing or unreadable.
    #[error("Gallery asset missing: {path}")]
    GalleryAsset { path: PathBuf },

    /// Writing the generated gallery failed.
    #[error("Gallery output failed: {reason}")]
    GalleryOutput { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Parse { path, .. } => vec![
                format!("The store file {} contains malformed data", path.display()),
                "Fix the offending row or move the file aside to start fresh".into(),
            ],
            Self::StorageIo { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "The movie store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Network { reason } => vec![
                format!("Network problem: {}", reason),
                "Check your internet connection and OMDB_API_KEY".into(),
                "You can retry, or add the movie manually with --year/--rating".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            Self::GalleryAsset { path } => vec![
                format!("Missing asset: {}", path.display()),
                "Provide --template/--stylesheet, or omit both to use the built-in assets".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse { .. } | Self::StorageIo { .. } | Self::StoreLockError => {
                ErrorCategory::Storage
            }
            Self::Network { .. } => ErrorCategory::Network,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::GalleryAsset { .. } | Self::GalleryOutput { .. } => ErrorCategory::Storage,
        }
    }
}
