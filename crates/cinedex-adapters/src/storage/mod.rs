//! Storage backends implementing the `MovieStore` port.
//!
//! All file-backed backends share the same mutation strategy: full read,
//! in-memory change, full rewrite. There is no in-place edit path; the
//! dataset is assumed small enough that rewriting per mutation is fine.

pub mod csv;
pub mod json;
pub mod memory;

pub use csv::CsvStore;
pub use json::JsonStore;
pub use memory::MemoryStore;

use std::io;
use std::path::Path;

use cinedex_core::{application::ApplicationError, error::CoreError};

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CoreError {
    ApplicationError::StorageIo {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
