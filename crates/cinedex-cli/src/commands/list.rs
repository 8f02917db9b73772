//! `cinedex list` — print the whole catalog.

use crate::{
    backend,
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::movie_line;

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = backend::build_service(&global, &config)?;
    let catalog = service.list()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("{} movie(s) in total", catalog.len()))?;
            for (title, movie) in &catalog {
                output.print(&format!("  {}", movie_line(title, movie)))?;
            }
        }

        ListFormat::List => {
            for title in catalog.keys() {
                println!("{title}");
            }
        }

        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&catalog).map_err(|e| {
                crate::error::CliError::InvalidInput {
                    message: format!("Failed to serialise catalog: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("title,rating,year,poster");
            for (title, movie) in &catalog {
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

/// Quote a field when it contains a delimiter, quote, or newline.
pub(crate) fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_field_unquoted() {
        assert_eq!(csv_field("The Matrix"), "The Matrix");
    }

    #[test]
    fn comma_field_quoted() {
        assert_eq!(csv_field("Me, Myself & Irene"), "\"Me, Myself & Irene\"");
    }

    #[test]
    fn embedded_quotes_doubled() {
        assert_eq!(csv_field("Say \"Hi\""), "\"Say \"\"Hi\"\"\"");
    }
}
