//! In-memory movie store for testing.

use std::sync::{Arc, RwLock};

use cinedex_core::{
    application::{ApplicationError, ports::MovieStore},
    domain::{Catalog, Movie, movie::find_key_ignore_case},
    error::CoreResult,
};

/// Thread-safe in-memory store, same contract as the file backends.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Catalog>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records (testing helper).
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let catalog: Catalog = movies.into_iter().map(Movie::into_entry).collect();
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Number of records; 0 when the lock is poisoned.
    pub fn len(&self) -> usize {
        self.inner.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MovieStore for MemoryStore {
    fn list_movies(&self) -> CoreResult<Catalog> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn add_movie(&self, movie: &Movie) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let (title, details) = movie.clone().into_entry();
        inner.insert(title, details);
        Ok(())
    }

    fn delete_movie(&self, title: &str) -> CoreResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let Some(key) = find_key_ignore_case(&inner, title).map(String::from) else {
            return Ok(false);
        };
        inner.remove(&key);
        Ok(true)
    }

    fn update_movie(&self, title: &str, new_rating: f64) -> CoreResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let Some(key) = find_key_ignore_case(&inner, title).map(String::from) else {
            return Ok(false);
        };
        if let Some(details) = inner.get_mut(&key) {
            details.rating = new_rating;
        }
        Ok(true)
    }
}
