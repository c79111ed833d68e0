//! Application - Startup and Console Loop
//!
//! Loads the configuration, fetches the dataset, renders the grid, then
//! serves console commands until `quit` or end of input.

use std::io::Write;

use anyhow::Context;
use crossbeam_channel::{Receiver, unbounded};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::cli::Cli;
use crate::components::{Renderer, TextRenderer};
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::eventing::{CONSOLE_HELP, ConsoleCommand};
use crate::services::{DatasetSource, RecordSource, block_on, fetch_into, spawn_named_in_tokio};
use crate::states::GridController;
use crate::utils::{config_path, load_config_from, save_config_to};

const PROMPT: &str = "> ";

/// Run the Country Grid application
pub fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let config = load_effective_config(cli)?;

    let source = DatasetSource::from_config(&config.source)
        .context("Failed to set up the dataset source")?;
    let mut grid = GridController::new(config.grid).context("Invalid grid configuration")?;
    let mut renderer = TextRenderer::new(std::io::stdout());

    tracing::info!("Dataset source: {}", source.describe());
    refresh(&mut grid, &source, &mut renderer)?;

    let commands = spawn_console_reader();
    prompt()?;
    for received in commands.iter() {
        match received {
            Ok(ConsoleCommand::Grid(command)) => renderer.render(&grid.dispatch(command))?,
            Ok(ConsoleCommand::Reload) => refresh(&mut grid, &source, &mut renderer)?,
            Ok(ConsoleCommand::Help) => println!("{CONSOLE_HELP}"),
            Ok(ConsoleCommand::Quit) => break,
            Err(err) => {
                tracing::debug!("Rejected console input: {}", err);
                println!("{err}");
            }
        }
        prompt()?;
    }

    tracing::info!("Console closed");
    Ok(())
}

/// Config file, then command-line overrides, then normalization
fn load_effective_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config_path().context("Failed to resolve the config directory")?,
    };

    let mut config = load_config_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    cli.apply_overrides(&mut config);
    config.grid = config.grid.normalize()?;

    if cli.save_config {
        save_config_to(&path, &config)
            .with_context(|| format!("Failed to save config to {}", path.display()))?;
    }

    Ok(config)
}

/// Fetch, then show the result
fn refresh<S, R>(grid: &mut GridController, source: &S, renderer: &mut R) -> Result<()>
where
    S: RecordSource,
    R: Renderer,
{
    println!("Loading {}...", source.describe());
    let view = block_on(fetch_into(grid, source));
    renderer.render(&view)
}

/// Read stdin lines on the runtime and hand parsed commands to the loop.
/// End of input is reported as `Quit`.
fn spawn_console_reader() -> Receiver<Result<ConsoleCommand>> {
    let (tx, rx) = unbounded();

    spawn_named_in_tokio("console-reader", async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if tx.send(line.parse::<ConsoleCommand>()).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    let _ = tx.send(Ok(ConsoleCommand::Quit));
                    break;
                }
                Err(err) => {
                    tracing::warn!("Failed to read console input: {}", err);
                    let _ = tx.send(Ok(ConsoleCommand::Quit));
                    break;
                }
            }
        }
    });

    rx
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::GridConfig;
    use crate::domain::view::{GridView, LoadStatus};
    use crate::services::FileSource;

    #[derive(Default)]
    struct RecordingRenderer {
        views: Vec<GridView>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, view: &GridView) -> Result<()> {
            self.views.push(view.clone());
            Ok(())
        }
    }

    #[test]
    fn test_refresh_renders_fetched_view_once() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"name":"Chad"}},{{"name":"Benin"}}]"#).expect("write");

        let mut grid = GridController::new(GridConfig::default()).expect("grid");
        let mut renderer = RecordingRenderer::default();
        refresh(&mut grid, &FileSource::new(file.path()), &mut renderer).expect("refresh");

        assert_eq!(renderer.views.len(), 1);
        assert_eq!(renderer.views[0].status, LoadStatus::Ready);
        assert_eq!(renderer.views[0].column_texts("name"), vec!["Benin", "Chad"]);
    }

    #[test]
    fn test_refresh_failure_keeps_rows() {
        let mut grid = GridController::new(GridConfig::default()).expect("grid");
        let mut renderer = RecordingRenderer::default();
        refresh(&mut grid, &FileSource::new("/no/such/countries.json"), &mut renderer)
            .expect("refresh");

        assert_eq!(renderer.views.len(), 1);
        assert!(renderer.views[0].status.warning().is_some());
    }
}
