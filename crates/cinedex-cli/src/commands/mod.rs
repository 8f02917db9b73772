//! Command handlers.
//!
//! One module per subcommand.  Each `execute` takes its parsed args plus
//! the global flags, config, and output manager, builds the service it
//! needs via [`crate::backend`], and translates results into user-facing
//! lines.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod gallery;
#[cfg(feature = "interactive")]
pub mod interactive;
pub mod list;
pub mod random;
pub mod search;
pub mod sorted;
pub mod stats;
pub mod update;

use cinedex_core::domain::MovieDetails;

/// Shared one-line rendering: `Title (2021): 8.0`.
pub(crate) fn movie_line(title: &str, movie: &MovieDetails) -> String {
    format!("{} ({}): {:.1}", title, movie.year, movie.rating)
}
