//! `cinedex sorted` — catalog ordered by rating, best first.

use crate::{
    backend, cli::global::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

use super::movie_line;

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;
    let ranked = service.sorted()?;

    if ranked.is_empty() {
        output.warning("The catalog is empty")?;
        return Ok(());
    }

    output.header("Movies by rating")?;
    for (rank, (title, movie)) in ranked.iter().enumerate() {
        output.print(&format!("  {:>2}. {}", rank + 1, movie_line(title, movie)))?;
    }

    Ok(())
}
