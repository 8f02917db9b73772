//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat, StorageKind};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cinedex",
    bin_name = "cinedex",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ac} Personal movie catalog",
    long_about = "Cinedex keeps a personal movie catalog in a flat file \
                  (CSV or JSON), enriches entries from the OMDb API, and \
                  renders the collection as a static HTML gallery.",
    after_help = "EXAMPLES:\n\
        \x20 cinedex add \"The Matrix\"\n\
        \x20 cinedex add \"Home Video\" --year 2019 --rating 6.5\n\
        \x20 cinedex list --storage csv --file movies.csv\n\
        \x20 cinedex gallery --output-dir site --title \"My Movies\"\n\
        \x20 cinedex completions bash > /usr/share/bash-completion/completions/cinedex",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every movie in the catalog.
    #[command(
        visible_alias = "ls",
        about = "List all movies",
        after_help = "EXAMPLES:\n\
            \x20 cinedex list\n\
            \x20 cinedex list --format json\n\
            \x20 cinedex list --storage csv --file movies.csv"
    )]
    List(ListArgs),

    /// Add a movie, by OMDb lookup or manually.
    #[command(
        visible_alias = "a",
        about = "Add a movie",
        after_help = "EXAMPLES:\n\
            \x20 cinedex add \"The Matrix\"             # OMDb lookup\n\
            \x20 cinedex add \"Home Video\" --year 2019 --rating 6.5\n\
            \x20 cinedex add \"Old Film\" --year 1962 --rating 7.0 --poster http://example/p.jpg"
    )]
    Add(AddArgs),

    /// Change the rating of an existing movie.
    #[command(
        about = "Update a movie's rating",
        after_help = "EXAMPLES:\n\
            \x20 cinedex update \"The Matrix\" 9.1\n\
            \x20 cinedex update \"the matrix\" 9.1   # title match is case-insensitive"
    )]
    Update(UpdateArgs),

    /// Remove a movie from the catalog.
    #[command(
        visible_alias = "rm",
        about = "Delete a movie",
        after_help = "EXAMPLES:\n\
            \x20 cinedex delete \"The Matrix\"\n\
            \x20 cinedex rm \"the matrix\"   # title match is case-insensitive"
    )]
    Delete(DeleteArgs),

    /// Search movie titles.
    #[command(
        about = "Search titles (case-insensitive substring)",
        after_help = "EXAMPLES:\n\
            \x20 cinedex search matrix\n\
            \x20 cinedex search \"the\""
    )]
    Search(SearchArgs),

    /// Show rating statistics for the catalog.
    #[command(about = "Show rating statistics")]
    Stats,

    /// Pick one movie at random.
    #[command(about = "Suggest a random movie")]
    Random,

    /// List movies ordered by rating, best first.
    #[command(about = "List movies sorted by rating (descending)")]
    Sorted,

    /// Render the catalog as a static HTML gallery.
    #[command(
        visible_alias = "website",
        about = "Generate a static HTML gallery",
        after_help = "EXAMPLES:\n\
            \x20 cinedex gallery\n\
            \x20 cinedex gallery --output-dir site --title \"My Movies\"\n\
            \x20 cinedex gallery --template _static/index_template.html --stylesheet _static/style.css"
    )]
    Gallery(GalleryArgs),

    /// Run the menu-driven interactive session.
    #[cfg(feature = "interactive")]
    #[command(
        visible_alias = "menu",
        about = "Interactive menu session",
        after_help = "Runs a numbered menu loop (list, add, delete, update, \
            stats, random, search, sorted, gallery) until you choose Exit."
    )]
    Interactive,

    /// Manage the Cinedex configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cinedex config get storage.backend\n\
            \x20 cinedex config set storage.backend csv\n\
            \x20 cinedex config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cinedex completions bash > ~/.local/share/bash-completion/completions/cinedex\n\
            \x20 cinedex completions zsh  > ~/.zfunc/_cinedex\n\
            \x20 cinedex completions fish > ~/.config/fish/completions/cinedex.fish"
    )]
    Completions(CompletionsArgs),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `cinedex list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list`, `search`, and `sorted` commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable lines.
    Table,
    /// One title per line.
    List,
    /// JSON object keyed by title.
    Json,
    /// CSV rows.
    Csv,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `cinedex add`.
///
/// Without `--year`/`--rating` the title is resolved via the OMDb API.
/// With both, the record is stored exactly as given and no network call
/// is made.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Movie title to add.
    #[arg(value_name = "TITLE", help = "Movie title")]
    pub title: String,

    /// Release year (manual entry; requires --rating).
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        requires = "rating",
        help = "Release year (skips the OMDb lookup)"
    )]
    pub year: Option<i32>,

    /// Rating 0.0-10.0 (manual entry; requires --year).
    #[arg(
        short = 'r',
        long = "rating",
        value_name = "RATING",
        requires = "year",
        help = "Rating 0.0-10.0 (skips the OMDb lookup)"
    )]
    pub rating: Option<f64>,

    /// Poster URL (manual entry only).
    #[arg(
        short = 'p',
        long = "poster",
        value_name = "URL",
        requires = "year",
        help = "Poster image URL"
    )]
    pub poster: Option<String>,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `cinedex update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Movie title (matched case-insensitively).
    #[arg(value_name = "TITLE", help = "Movie title")]
    pub title: String,

    /// New rating, 0.0-10.0 inclusive.
    #[arg(value_name = "RATING", help = "New rating (0.0-10.0)")]
    pub rating: f64,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `cinedex delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Movie title (matched case-insensitively).
    #[arg(value_name = "TITLE", help = "Movie title")]
    pub title: String,
}

// ── search ────────────────────────────────────────────────────────────────────

/// Arguments for `cinedex search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Substring to look for in titles.
    #[arg(value_name = "QUERY", help = "Search term")]
    pub query: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── gallery ───────────────────────────────────────────────────────────────────

/// Arguments for `cinedex gallery`.
#[derive(Debug, Args)]
pub struct GalleryArgs {
    /// Directory the page and stylesheet are written into.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory (default: from config, else current directory)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Page title.
    #[arg(
        short = 't',
        long = "title",
        value_name = "TITLE",
        help = "Gallery page title"
    )]
    pub title: Option<String>,

    /// Custom HTML template instead of the built-in one.
    #[arg(
        long = "template",
        value_name = "FILE",
        help = "Custom HTML template file"
    )]
    pub template: Option<PathBuf>,

    /// Custom stylesheet instead of the built-in one.
    #[arg(
        long = "stylesheet",
        value_name = "FILE",
        help = "Custom stylesheet file"
    )]
    pub stylesheet: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cinedex completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cinedex config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.backend`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn storage_kind_display() {
        assert_eq!(StorageKind::Csv.to_string(), "csv");
        assert_eq!(StorageKind::Json.to_string(), "json");
    }

    #[test]
    fn parse_add_lookup() {
        let cli = Cli::parse_from(["cinedex", "add", "The Matrix"]);
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.title, "The Matrix");
            assert!(args.year.is_none());
        } else {
            panic!("expected Add command");
        }
    }

    #[test]
    fn parse_add_manual() {
        let cli = Cli::parse_from([
            "cinedex", "add", "Home Video", "--year", "2019", "--rating", "6.5",
        ]);
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.year, Some(2019));
            assert_eq!(args.rating, Some(6.5));
        } else {
            panic!("expected Add command");
        }
    }

    #[test]
    fn add_year_without_rating_is_rejected() {
        let result = Cli::try_parse_from(["cinedex", "add", "X", "--year", "2019"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_update_positional_rating() {
        let cli = Cli::parse_from(["cinedex", "update", "The Matrix", "9.1"]);
        if let Commands::Update(args) = cli.command {
            assert_eq!(args.rating, 9.1);
        } else {
            panic!("expected Update command");
        }
    }

    #[test]
    fn parse_global_storage_override() {
        let cli = Cli::parse_from(["cinedex", "list", "--storage", "csv", "--file", "m.csv"]);
        assert_eq!(cli.global.storage, Some(StorageKind::Csv));
        assert_eq!(cli.global.file.as_deref(), Some(std::path::Path::new("m.csv")));
    }

    #[test]
    fn rm_alias_maps_to_delete() {
        let cli = Cli::parse_from(["cinedex", "rm", "Alien"]);
        assert!(matches!(cli.command, Commands::Delete(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["cinedex", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
