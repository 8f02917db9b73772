//! Core domain layer for Cinedex.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (file storage, network lookups, gallery output) is handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Caller-side validation**: Stores trust input validated here first

// Public API - what the world sees
pub mod error;
pub mod movie;
pub mod views;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use movie::{Catalog, Movie, MovieDetails, RATING_MAX, RATING_MIN};
pub use validation::DomainValidator;
pub use views::{RatingStats, random_movie, search_titles, sorted_by_rating, stats};
