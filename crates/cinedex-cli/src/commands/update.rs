//! `cinedex update` — change a stored movie's rating.

use crate::{
    backend,
    cli::{UpdateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: UpdateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;

    if service.update(&args.title, args.rating)? {
        output.success(&format!(
            "Rating for '{}' set to {:.1}",
            args.title, args.rating
        ))?;
        Ok(())
    } else {
        Err(CliError::MovieNotFound { title: args.title })
    }
}
