//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`OMDB_API_KEY` only, read at the call-site)
//! 3. Config file (`--config` path, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage backend settings.
    pub storage: StorageConfig,
    /// OMDb API settings.
    pub omdb: OmdbConfig,
    /// Gallery generation settings.
    pub gallery: GalleryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// `csv` or `json`.
    pub backend: String,
    /// Store file path; `None` means the per-user data directory.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// API key; the `OMDB_API_KEY` environment variable takes priority.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub output_dir: Option<PathBuf>,
    pub title: String,
    pub template: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "json".into(),
            file: None,
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self { api_key: None }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            title: "My Movie App".into(),
            template: None,
            stylesheet: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            omdb: OmdbConfig::default(),
            gallery: GalleryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist; the default location is
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let cfg: Self = toml::from_str(&raw).map_err(|e| {
                    anyhow::anyhow!("Invalid config file {}: {e}", path.display())
                })?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Cannot read config file {}: {e}",
                path.display()
            )),
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cinedex.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cinedex", "cinedex")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cinedex.toml"))
    }

    /// Default store file path for `extension` (`csv` or `json`).
    ///
    /// Lives in the per-user data directory so the catalog survives
    /// whatever directory the command happens to run from.
    pub fn default_store_path(extension: &str) -> PathBuf {
        directories::ProjectDirs::from("com", "cinedex", "cinedex")
            .map(|d| d.data_dir().join(format!("movies.{extension}")))
            .unwrap_or_else(|| PathBuf::from(format!("movies.{extension}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_json() {
        assert_eq!(AppConfig::default().storage.backend, "json");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.gallery.title, "My Movie App");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let p = PathBuf::from("/nonexistent/cinedex-test/config.toml");
        assert!(AppConfig::load(Some(&p)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"csv\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.storage.backend, "csv");
        assert_eq!(cfg.gallery.title, "My Movie App");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storage = nonsense [").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
