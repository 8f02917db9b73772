//! Cinedex Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Cinedex
//! movie-catalog tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          cinedex-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (CatalogService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Driven: MovieStore, Metadata, Gallery) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    cinedex-adapters (Infrastructure)    │
//! │  (CsvStore, JsonStore, OmdbClient, ..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Movie, rating rules, derived views)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cinedex_core::{
//!     application::CatalogService,
//!     domain::Movie,
//! };
//!
//! // 1. Build a record
//! let movie = Movie::new("Dune", 2021, 8.0, "https://example.com/dune.jpg");
//!
//! // 2. Use the application service (with an injected store adapter)
//! let service = CatalogService::new(store);
//! service.add_manual(movie)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService,
        ports::{GalleryWriter, MetadataSource, MovieStore},
    };
    pub use crate::domain::{Catalog, Movie, MovieDetails, RatingStats};
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
