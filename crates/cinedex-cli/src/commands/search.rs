//! `cinedex search` — case-insensitive substring title search.

use crate::{
    backend,
    cli::{ListFormat, SearchArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{list::csv_field, movie_line};

pub fn execute(
    args: SearchArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;
    let matches = service.search(&args.query)?;

    if matches.is_empty() {
        // An empty result set is a normal outcome, not an error.
        output.warning(&format!("No titles match '{}'", args.query))?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "{} match(es) for '{}'",
                matches.len(),
                args.query
            ))?;
            for (title, movie) in &matches {
                output.print(&format!("  {}", movie_line(title, movie)))?;
            }
        }

        ListFormat::List => {
            for (title, _) in &matches {
                println!("{title}");
            }
        }

        ListFormat::Json => {
            let catalog: std::collections::BTreeMap<_, _> = matches.into_iter().collect();
            let json = serde_json::to_string_pretty(&catalog).map_err(|e| {
                crate::error::CliError::InvalidInput {
                    message: format!("Failed to serialise matches: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("title,rating,year,poster");
            for (title, movie) in &matches {
                println!(
                    "{},{},{},{}",
                    csv_field(title),
                    movie.rating,
                    movie.year,
                    csv_field(&movie.poster)
                );
            }
        }
    }

    Ok(())
}
