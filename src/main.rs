//! Country Grid - Main Entry Point
//!
//! Browse a remote dataset as a sortable, filterable, paginated table.

use clap::Parser;
use country_grid::app::application::run_app;
use country_grid::app::cli::Cli;
use country_grid::app::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(cli.log_stderr)?;

    tracing::info!("Starting Country Grid...");

    run_app(&cli)
}
