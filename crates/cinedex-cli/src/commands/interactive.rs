//! `cinedex interactive` — menu-driven session.
//!
//! A numbered menu loop over the same service operations the one-shot
//! subcommands use.  Only compiled with the `interactive` feature.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::debug;

use cinedex_core::domain::Movie;

use crate::{
    backend,
    cli::{GalleryArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::movie_line;

const MENU: &[&str] = &[
    "Exit",
    "List movies",
    "Add movie",
    "Delete movie",
    "Update movie",
    "Stats",
    "Random movie",
    "Search movie",
    "Movies sorted by rating",
    "Generate website",
];

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let theme = ColorfulTheme::default();

    output.header("********** Cinedex **********")?;

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Menu")
            .items(MENU)
            .default(1)
            .interact_opt()
            .map_err(dialoguer_error)?;

        // Esc/q quits the same way as the explicit Exit entry.
        let Some(choice) = choice else { break };
        debug!(choice, "Menu selection");

        let result = match choice {
            0 => break,
            1 => list(&global, &config, &output),
            2 => add(&global, &config, &output, &theme),
            3 => delete(&global, &config, &output, &theme),
            4 => update(&global, &config, &output, &theme),
            5 => stats(&global, &config, &output),
            6 => random(&global, &config, &output),
            7 => search(&global, &config, &output, &theme),
            8 => sorted(&global, &config, &output),
            9 => gallery(&global, &config, &output),
            _ => unreachable!("menu index out of range"),
        };

        // Per-action failures are reported and the menu continues; only
        // I/O failures on the terminal itself abort the session.
        if let Err(e) = result {
            output.error(&e.to_string())?;
            for suggestion in e.suggestions() {
                output.print(&format!("  {suggestion}"))?;
            }
        }

        output.print("")?;
    }

    output.print("Bye!")?;
    Ok(())
}

// ── menu actions ──────────────────────────────────────────────────────────────

fn list(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = backend::build_service(global, config)?;
    let catalog = service.list()?;
    output.header(&format!("{} movie(s) in total", catalog.len()))?;
    for (title, movie) in &catalog {
        output.print(&format!("  {}", movie_line(title, movie)))?;
    }
    Ok(())
}

fn add(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Movie title")
        .interact_text()
        .map_err(dialoguer_error)?;
    let title = title.trim().to_string();

    let lookup = Confirm::with_theme(theme)
        .with_prompt("Fetch details from OMDb?")
        .default(true)
        .interact()
        .map_err(dialoguer_error)?;

    if lookup {
        let service = backend::build_service_with_metadata(global, config)?;
        match service.add_by_lookup(&title)? {
            Some(movie) => output.success(&format!(
                "Movie '{}' ({}) added with rating {:.1}",
                movie.title, movie.year, movie.rating
            ))?,
            None => output.warning(&format!("OMDb does not know '{title}'"))?,
        }
        return Ok(());
    }

    let year: i32 = Input::with_theme(theme)
        .with_prompt("Release year")
        .interact_text()
        .map_err(dialoguer_error)?;
    let rating: f64 = Input::with_theme(theme)
        .with_prompt("Rating (0.0-10.0)")
        .interact_text()
        .map_err(dialoguer_error)?;
    let poster: String = Input::with_theme(theme)
        .with_prompt("Poster URL")
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error)?;

    let service = backend::build_service(global, config)?;
    service.add_manual(Movie::new(title.clone(), year, rating, poster))?;
    output.success(&format!("Movie '{title}' added"))?;
    Ok(())
}

fn delete(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Movie title to delete")
        .interact_text()
        .map_err(dialoguer_error)?;

    let service = backend::build_service(global, config)?;
    if service.delete(&title)? {
        output.success(&format!("Movie '{title}' deleted"))?;
    } else {
        output.warning(&format!("No movie matches '{title}'"))?;
    }
    Ok(())
}

fn update(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Movie title to update")
        .interact_text()
        .map_err(dialoguer_error)?;
    let rating: f64 = Input::with_theme(theme)
        .with_prompt("New rating (0.0-10.0)")
        .interact_text()
        .map_err(dialoguer_error)?;

    let service = backend::build_service(global, config)?;
    if service.update(&title, rating)? {
        output.success(&format!("Rating for '{title}' set to {rating:.1}"))?;
    } else {
        output.warning(&format!("No movie matches '{title}'"))?;
    }
    Ok(())
}

fn stats(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = backend::build_service(global, config)?;
    let Some(stats) = service.stats()? else {
        output.warning("The catalog is empty - no statistics to report")?;
        return Ok(());
    };

    output.print(&format!("Movies:         {}", stats.count))?;
    output.print(&format!("Average rating: {:.1}", stats.average))?;
    output.print(&format!(
        "Best ({:.1}):     {}",
        stats.max_rating,
        stats.best.join(", ")
    ))?;
    output.print(&format!(
        "Worst ({:.1}):    {}",
        stats.min_rating,
        stats.worst.join(", ")
    ))?;
    Ok(())
}

fn random(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = backend::build_service(global, config)?;
    match service.random()? {
        Some((title, movie)) => {
            output.print(&format!("Tonight's pick: {}", movie_line(&title, &movie)))?;
        }
        None => output.warning("The catalog is empty - nothing to pick from")?,
    }
    Ok(())
}

fn search(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
    theme: &ColorfulTheme,
) -> CliResult<()> {
    let query: String = Input::with_theme(theme)
        .with_prompt("Search term")
        .interact_text()
        .map_err(dialoguer_error)?;

    let service = backend::build_service(global, config)?;
    let matches = service.search(&query)?;
    if matches.is_empty() {
        output.warning(&format!("No titles match '{query}'"))?;
        return Ok(());
    }
    for (title, movie) in &matches {
        output.print(&format!("  {}", movie_line(title, movie)))?;
    }
    Ok(())
}

fn sorted(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = backend::build_service(global, config)?;
    for (rank, (title, movie)) in service.sorted()?.iter().enumerate() {
        output.print(&format!("  {:>2}. {}", rank + 1, movie_line(title, movie)))?;
    }
    Ok(())
}

fn gallery(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let args = GalleryArgs {
        output_dir: None,
        title: None,
        template: None,
        stylesheet: None,
    };
    let (service, title) = backend::build_service_with_gallery(global, config, &args)?;
    let index = service.generate_gallery(&title)?;
    output.success(&format!("Gallery written to {}", index.display()))?;
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Ctrl-C during a prompt surfaces as an I/O error in dialoguer; treat it
/// as a cancellation rather than an internal failure.
fn dialoguer_error(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(io) => CliError::IoError {
            message: "terminal prompt failed".into(),
            source: io,
        },
    }
}
