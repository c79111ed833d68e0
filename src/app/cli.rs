//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::config::AppConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "country-grid",
    version,
    about = "Country Grid - Browse a remote dataset as a sortable, filterable, paginated table",
    long_about = "Fetch a JSON array of records and browse it as a table.\n\n\
                  Type `help` at the prompt for the list of commands."
)]
pub struct Cli {
    /// Configuration file (default: grid.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset location: an http(s) URL or a local JSON file.
    #[arg(long = "source", value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Rows per page.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Show every row on a single page.
    #[arg(long = "no-pagination")]
    pub no_pagination: bool,

    /// Write logs to stderr instead of the log file.
    #[arg(long = "log-stderr")]
    pub log_stderr: bool,

    /// Write the effective configuration back to the config file.
    #[arg(long = "save-config")]
    pub save_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(source) = &self.source {
            config.source.url = source.clone();
        }
        if let Some(page_size) = self.page_size {
            config.grid.page_size = page_size;
        }
        if self.no_pagination {
            config.grid.paginated = false;
        }
    }
}
