//! Logging initialization.
//!
//! Logs go to a daily-rolling file in the data directory so they never
//! interleave with the table on the terminal. `RUST_LOG` overrides the
//! default `info` level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_FILE_PREFIX;
use crate::error::Result;
use crate::helpers::get_or_create_data_dir;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must live until
/// the program exits. `None` means logs go to stderr.
pub fn init_tracing(log_stderr: bool) -> Result<Option<WorkerGuard>> {
    if log_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = get_or_create_data_dir()?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
