//! ConfigStore - Local Configuration Storage
//!
//! The grid configuration lives in `grid.toml` inside the platform config
//! directory. A missing or empty file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Default location of the configuration file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration from `path`
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        info!(path = ?path, "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    info!(path = ?path, "Loading config file");
    let value = fs::read_to_string(path)?;
    if value.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let config: AppConfig = toml::from_str(&value).map_err(|e| {
        error!(error = %e, path = ?path, "Failed to parse config file");
        e
    })?;

    Ok(config)
}

/// Save the configuration to `path`, creating parent directories
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    info!(path = ?path, "Saved config file");
    Ok(())
}
