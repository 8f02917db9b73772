//! Service construction from CLI flags and configuration.
//!
//! Resolution order for each setting: CLI flag, then config file, then
//! built-in default.  The OMDb key additionally honours `OMDB_API_KEY`
//! from the environment (loaded from `.env` by `main`).

use std::path::PathBuf;

use tracing::debug;

use cinedex_adapters::{CsvStore, HtmlGallery, JsonStore, OmdbClient};
use cinedex_core::application::ports::MovieStore;
use cinedex_core::application::services::CatalogService;

use crate::{
    cli::{GalleryArgs, GlobalArgs, StorageKind},
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the storage backend kind from flags and config.
pub fn resolve_backend(global: &GlobalArgs, config: &AppConfig) -> CliResult<StorageKind> {
    if let Some(kind) = global.storage {
        return Ok(kind);
    }
    match config.storage.backend.as_str() {
        "csv" => Ok(StorageKind::Csv),
        "json" => Ok(StorageKind::Json),
        other => Err(CliError::ConfigError {
            message: format!("Unknown storage backend '{other}' (expected 'csv' or 'json')"),
            source: None,
        }),
    }
}

/// Resolve the store file path from flags and config.
pub fn resolve_store_path(
    global: &GlobalArgs,
    config: &AppConfig,
    kind: StorageKind,
) -> PathBuf {
    global
        .file
        .clone()
        .or_else(|| config.storage.file.clone())
        .unwrap_or_else(|| AppConfig::default_store_path(&kind.to_string()))
}

/// Open the configured storage backend.
pub fn open_store(global: &GlobalArgs, config: &AppConfig) -> CliResult<Box<dyn MovieStore>> {
    let kind = resolve_backend(global, config)?;
    let path = resolve_store_path(global, config, kind);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!(backend = %kind, path = %path.display(), "Opening store");

    let store: Box<dyn MovieStore> = match kind {
        StorageKind::Csv => Box::new(CsvStore::open(path)?),
        StorageKind::Json => Box::new(JsonStore::open(path)?),
    };
    Ok(store)
}

/// Service over the configured store, with no optional adapters.
pub fn build_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<CatalogService> {
    Ok(CatalogService::new(open_store(global, config)?))
}

/// Service with the OMDb metadata source attached.
///
/// Fails fast with [`CliError::MissingApiKey`] when no key is available
/// from the environment or the config file.
pub fn build_service_with_metadata(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<CatalogService> {
    let api_key = std::env::var("OMDB_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .or_else(|| config.omdb.api_key.clone())
        .ok_or(CliError::MissingApiKey)?;

    let client = OmdbClient::new(api_key)?;
    Ok(build_service(global, config)?.with_metadata(Box::new(client)))
}

/// Service with the HTML gallery writer attached.
///
/// Also returns the resolved page title, since the writer does not carry it.
pub fn build_service_with_gallery(
    global: &GlobalArgs,
    config: &AppConfig,
    args: &GalleryArgs,
) -> CliResult<(CatalogService, String)> {
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.gallery.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut gallery = HtmlGallery::new(output_dir);
    if let Some(template) = args.template.clone().or_else(|| config.gallery.template.clone()) {
        gallery = gallery.with_template(template);
    }
    if let Some(stylesheet) = args
        .stylesheet
        .clone()
        .or_else(|| config.gallery.stylesheet.clone())
    {
        gallery = gallery.with_stylesheet(stylesheet);
    }

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| config.gallery.title.clone());

    let service = build_service(global, config)?.with_gallery(Box::new(gallery));
    Ok((service, title))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(storage: Option<StorageKind>, file: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            storage,
            file,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn flag_overrides_config_backend() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = "json".into();
        let kind = resolve_backend(&global(Some(StorageKind::Csv), None), &cfg).unwrap();
        assert_eq!(kind, StorageKind::Csv);
    }

    #[test]
    fn unknown_config_backend_is_a_config_error() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = "sqlite".into();
        let err = resolve_backend(&global(None, None), &cfg).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn store_path_prefers_flag_over_config() {
        let mut cfg = AppConfig::default();
        cfg.storage.file = Some(PathBuf::from("cfg.json"));
        let path = resolve_store_path(
            &global(None, Some(PathBuf::from("flag.json"))),
            &cfg,
            StorageKind::Json,
        );
        assert_eq!(path, PathBuf::from("flag.json"));
    }

    #[test]
    fn default_store_path_carries_backend_extension() {
        let cfg = AppConfig::default();
        let path = resolve_store_path(&global(None, None), &cfg, StorageKind::Csv);
        assert!(path.to_string_lossy().ends_with("movies.csv"));
    }

    #[test]
    fn open_store_creates_the_backing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("nested/movies.json");
        let cfg = AppConfig::default();

        let store = open_store(&global(Some(StorageKind::Json), Some(file.clone())), &cfg).unwrap();
        assert!(file.exists());
        assert!(store.list_movies().unwrap().is_empty());
    }
}
