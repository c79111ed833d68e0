//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::{PROJECT_APPLICATION, PROJECT_ORGANIZATION, PROJECT_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION).ok_or_else(
        || Error::Invalid {
            message: "Could not determine project directories".to_string(),
        },
    )
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/country-grid/` or `$XDG_CONFIG_HOME/country-grid/`
/// - **macOS**: `~/Library/Application Support/com.country-grid.country-grid/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\country-grid\country-grid\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get the data directory (log files live here)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/country-grid/`
/// - **macOS**: `~/Library/Application Support/com.country-grid.country-grid/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\country-grid\country-grid\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}
