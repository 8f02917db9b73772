//! The movie record and the catalog mapping derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lower bound of the accepted rating range.
pub const RATING_MIN: f64 = 0.0;
/// Upper bound of the accepted rating range.
pub const RATING_MAX: f64 = 10.0;

/// One movie as handled by the application: the title plus its details.
///
/// The title is the unique identifying key. It is stored with its exact
/// case; lookups for delete/update match case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    /// May be empty when no poster is known.
    pub poster_url: String,
}

impl Movie {
    /// Build a record. Validation (non-empty title, rating range) happens
    /// separately via [`crate::domain::DomainValidator`] at the caller,
    /// not in the record or the stores.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        rating: f64,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster_url: poster_url.into(),
        }
    }

    /// Split into the catalog key and value pair.
    pub fn into_entry(self) -> (String, MovieDetails) {
        (
            self.title,
            MovieDetails {
                year: self.year,
                rating: self.rating,
                poster: self.poster_url,
            },
        )
    }
}

/// The value side of a catalog entry.
///
/// Field names match the on-disk JSON document (`year`, `rating`, `poster`),
/// so the JSON backend can serialize the catalog verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

/// All movies, keyed by exact title.
///
/// A `BTreeMap` keeps listing order deterministic across backends; no
/// consumer relies on insertion order.
pub type Catalog = BTreeMap<String, MovieDetails>;

/// Find the exact stored key matching `title` case-insensitively.
///
/// This is the single matching rule for delete and update on every backend.
pub fn find_key_ignore_case<'a>(catalog: &'a Catalog, title: &str) -> Option<&'a str> {
    let wanted = title.to_lowercase();
    catalog
        .keys()
        .find(|k| k.to_lowercase() == wanted)
        .map(String::as_str)
}
