//! JSON-backed movie store.
//!
//! The whole store is one top-level object keyed by title, each value
//! `{ "year": int, "rating": number, "poster": string }`. The catalog map
//! serializes verbatim, so load and save are plain serde_json calls.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use cinedex_core::{
    application::{ApplicationError, ports::MovieStore},
    domain::{Catalog, Movie, movie::find_key_ignore_case},
    error::CoreResult,
};

use super::map_io_error;

/// Movie store over a single structured document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open a store at `path`, creating it as an empty object if the file
    /// does not exist.
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "Creating JSON store");
            fs::write(&path, "{}").map_err(|e| map_io_error(&path, e, "create store file"))?;
        }
        Ok(Self { path })
    }

    fn load(&self) -> CoreResult<Catalog> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| map_io_error(&self.path, e, "read store file"))?;
        serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, catalog: &Catalog) -> CoreResult<()> {
        let raw = serde_json::to_string_pretty(catalog).map_err(|e| {
            ApplicationError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&self.path, raw).map_err(|e| map_io_error(&self.path, e, "write store file"))
    }
}

impl MovieStore for JsonStore {
    fn list_movies(&self) -> CoreResult<Catalog> {
        self.load()
    }

    fn add_movie(&self, movie: &Movie) -> CoreResult<()> {
        let mut catalog = self.load()?;
        let (title, details) = movie.clone().into_entry();
        catalog.insert(title, details);
        self.save(&catalog)
    }

    fn delete_movie(&self, title: &str) -> CoreResult<bool> {
        let mut catalog = self.load()?;
        let Some(key) = find_key_ignore_case(&catalog, title).map(String::from) else {
            return Ok(false);
        };
        catalog.remove(&key);
        self.save(&catalog)?;
        Ok(true)
    }

    fn update_movie(&self, title: &str, new_rating: f64) -> CoreResult<bool> {
        let mut catalog = self.load()?;
        let Some(key) = find_key_ignore_case(&catalog, title).map(String::from) else {
            return Ok(false);
        };
        if let Some(details) = catalog.get_mut(&key) {
            details.rating = new_rating;
        }
        self.save(&catalog)?;
        Ok(true)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
