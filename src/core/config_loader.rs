// src/core/config_loader.rs

use crate::{constants, models::ShellConfig};
use anyhow::{Context, Result};
use std::{fs, path::Path, path::PathBuf};

/// Resolves (and creates if needed) the formic config directory.
pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not determine the user config directory.")?
        .join(constants::CONFIG_DIR_NAME);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory '{}'", dir.display()))?;
    Ok(dir)
}

/// Loads `config.toml`, writing a default file first if none exists yet.
/// A malformed file is a startup error, not something to silently ignore.
pub fn load_or_init() -> Result<ShellConfig> {
    let path = config_dir()?.join(constants::CONFIG_FILENAME);
    load_or_init_at(&path)
}

fn load_or_init_at(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        let default_config = generated_default();
        let toml_string = toml::to_string_pretty(&default_config)
            .context("Failed to serialize the default configuration")?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write default config to '{}'", path.display()))?;
        log::debug!("Wrote default configuration to '{}'", path.display());
        return Ok(default_config);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

/// The file written on first run. Defaults are spelled out concretely so
/// the user has something to edit rather than an empty file.
fn generated_default() -> ShellConfig {
    ShellConfig {
        prompt: Some(constants::DEFAULT_PROMPT.to_string()),
        editor: Some(constants::DEFAULT_EDITOR.to_string()),
    }
}
