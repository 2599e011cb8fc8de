// File logging setup.
// The terminal belongs to the TUI, so all log output goes to a file in the cache directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cache::LOG_FILE_NAME;

/// Initialize logging to `<dir>/articles-directory.log`.
///
/// Uses the RUST_LOG environment variable, defaulting to "info".
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init_file_logging(dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    guard
}
