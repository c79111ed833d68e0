//! Tokio Runtime Bridge
//!
//! The grid and the console loop are synchronous; only the dataset fetch is
//! async. This module owns one process-wide tokio runtime and lets the
//! synchronous side wait on a fetch.
//!
//! ## Pattern
//!
//! ```text
//! console loop (sync)
//!       │
//!       ▼
//! block_on(fetch_into(...))
//!       │
//!       ▼
//! tokio::Runtime (reqwest / tokio::fs)
//!       │
//!       ▼
//! GridView returned to the loop
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Block on a future synchronously
///
/// **Warning**: This blocks the current thread. Call it from the console
/// loop, never from inside another future.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

/// Spawn a detached task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    });
}
