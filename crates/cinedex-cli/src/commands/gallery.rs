//! `cinedex gallery` — render the catalog as a static HTML page.

use crate::{
    backend,
    cli::{GalleryArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: GalleryArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (service, title) = backend::build_service_with_gallery(&global, &config, &args)?;

    let index = service.generate_gallery(&title)?;
    output.success(&format!("Gallery written to {}", index.display()))?;

    Ok(())
}
