//! `cinedex delete` — remove a movie from the catalog.

use crate::{
    backend,
    cli::{DeleteArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: DeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;

    if service.delete(&args.title)? {
        output.success(&format!("Movie '{}' deleted", args.title))?;
        Ok(())
    } else {
        Err(CliError::MovieNotFound { title: args.title })
    }
}
