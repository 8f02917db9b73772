//! `cinedex config` — read and write configuration values.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // `--config` names the file for both reading and write-back; `set`
    // must never touch the default path when an override is given.
    let path = global.config.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut config = config;
            set_config_value(&mut config, &key, &value)?;
            persist(&config, &path)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "storage.backend" => Ok(config.storage.backend.clone()),
        "storage.file" => Ok(config
            .storage
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        // The key itself is never printed back; showing it with `get` would
        // leak it into shell history and logs.
        "omdb.api_key" => Ok(if config.omdb.api_key.is_some() {
            "<set>".into()
        } else {
            "<unset>".into()
        }),
        "gallery.title" => Ok(config.gallery.title.clone()),
        "gallery.output_dir" => Ok(config
            .gallery
            .output_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "storage.backend" => {
            if value != "csv" && value != "json" {
                return Err(CliError::ConfigError {
                    message: format!("Invalid backend '{value}' (expected 'csv' or 'json')"),
                    source: None,
                });
            }
            config.storage.backend = value.into();
        }
        "storage.file" => config.storage.file = Some(value.into()),
        "omdb.api_key" => config.omdb.api_key = Some(value.into()),
        "gallery.title" => config.gallery.title = value.into(),
        "gallery.output_dir" => config.gallery.output_dir = Some(value.into()),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("Invalid boolean '{value}' for output.no_color"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.into(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

fn persist(config: &AppConfig, path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    std::fs::write(path, serialised)?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
