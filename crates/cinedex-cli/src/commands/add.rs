//! `cinedex add` — add a movie by OMDb lookup or manually.

use tracing::debug;

use cinedex_core::domain::Movie;

use crate::{
    backend,
    cli::{AddArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // --year + --rating means the user specified the record; clap enforces
    // that the pair arrives together.
    if let (Some(year), Some(rating)) = (args.year, args.rating) {
        let movie = Movie::new(
            args.title.trim(),
            year,
            rating,
            args.poster.unwrap_or_default(),
        );
        let title = movie.title.clone();
        let service = backend::build_service(&global, &config)?;
        service.add_manual(movie)?;
        output.success(&format!("Movie '{title}' added"))?;
        return Ok(());
    }

    debug!(title = %args.title, "Resolving via OMDb");
    let service = backend::build_service_with_metadata(&global, &config)?;

    match service.add_by_lookup(args.title.trim())? {
        Some(movie) => {
            output.success(&format!(
                "Movie '{}' ({}) added with rating {:.1}",
                movie.title, movie.year, movie.rating
            ))?;
            Ok(())
        }
        None => Err(CliError::LookupMiss { title: args.title }),
    }
}
