//! Infrastructure adapters for Cinedex.
//!
//! This crate implements the ports defined in `cinedex-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod gallery;
pub mod metadata;
pub mod storage;

// Re-export commonly used adapters
pub use gallery::HtmlGallery;
pub use metadata::OmdbClient;
pub use storage::{CsvStore, JsonStore, MemoryStore};
