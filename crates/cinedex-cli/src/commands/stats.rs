//! `cinedex stats` — rating statistics for the catalog.

use crate::{
    backend, cli::global::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;

    let Some(stats) = service.stats()? else {
        output.warning("The catalog is empty - no statistics to report")?;
        return Ok(());
    };

    output.header("Catalog statistics")?;
    output.print(&format!("  Movies:         {}", stats.count))?;
    output.print(&format!("  Average rating: {:.1}", stats.average))?;
    output.print(&format!(
        "  Best ({:.1}):     {}",
        stats.max_rating,
        stats.best.join(", ")
    ))?;
    output.print(&format!(
        "  Worst ({:.1}):    {}",
        stats.min_rating,
        stats.worst.join(", ")
    ))?;

    Ok(())
}
