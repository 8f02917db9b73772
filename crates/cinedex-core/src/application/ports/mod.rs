//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cinedex-adapters` crate provides implementations.

use std::path::PathBuf;

use crate::domain::{Catalog, Movie};
use crate::error::CoreResult;

#[cfg(test)]
use mockall::automock;

/// Port for movie persistence.
///
/// Implemented by:
/// - `cinedex_adapters::storage::CsvStore` (delimited flat file)
/// - `cinedex_adapters::storage::JsonStore` (structured document)
/// - `cinedex_adapters::storage::MemoryStore` (testing)
///
/// ## Consistency contract
///
/// - Backends are stateless between calls: every operation reloads from
///   disk; no in-memory cache outlives a single method call.
/// - Every mutating call persists the entire store (full rewrite) before
///   returning.
/// - `add_movie` is an upsert keyed on the exact title; `delete_movie` and
///   `update_movie` match the title case-insensitively.
/// - Callers validate ratings before calling; backends do not re-validate.
#[cfg_attr(test, automock)]
pub trait MovieStore: Send + Sync {
    /// All movies keyed by title, reflecting on-disk truth at call time.
    /// An empty store yields an empty map, never an error.
    fn list_movies(&self) -> CoreResult<Catalog>;

    /// Insert or overwrite the record for `movie.title`.
    fn add_movie(&self, movie: &Movie) -> CoreResult<()>;

    /// Remove the case-insensitive match for `title`.
    /// Returns `false` (no error, no write) when nothing matched.
    fn delete_movie(&self, title: &str) -> CoreResult<bool>;

    /// Set `rating` on the case-insensitive match for `title`, leaving
    /// every other field untouched. Returns `false` when nothing matched.
    fn update_movie(&self, title: &str, new_rating: f64) -> CoreResult<bool>;
}

/// Port for title-to-metadata resolution.
///
/// Implemented by:
/// - `cinedex_adapters::metadata::OmdbClient` (production)
///
/// `Ok(None)` means the upstream source does not know the title; an `Err`
/// is a transport or decoding failure. Callers treat both as recoverable,
/// user-reportable conditions - never fatal.
#[cfg_attr(test, automock)]
pub trait MetadataSource: Send + Sync {
    fn lookup(&self, title: &str) -> CoreResult<Option<Movie>>;
}

/// Port for rendering the static HTML gallery.
///
/// Implemented by:
/// - `cinedex_adapters::gallery::HtmlGallery` (template substitution)
///
/// Returns the path of the generated document. Fails distinctly when the
/// template or its companion stylesheet is missing.
#[cfg_attr(test, automock)]
pub trait GalleryWriter: Send + Sync {
    fn write_gallery(&self, title: &str, catalog: &Catalog) -> CoreResult<PathBuf>;
}
