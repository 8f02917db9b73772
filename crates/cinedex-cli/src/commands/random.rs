//! `cinedex random` — suggest one movie at random.

use crate::{
    backend, cli::global::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

use super::movie_line;

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;

    match service.random()? {
        Some((title, movie)) => {
            output.print(&format!("Tonight's pick: {}", movie_line(&title, &movie)))?;
        }
        None => {
            output.warning("The catalog is empty - nothing to pick from")?;
        }
    }

    Ok(())
}
