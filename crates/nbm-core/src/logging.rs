//! Logging init: tracing subscriber writing to stdout.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stdout.
///
/// Per-file events (downloaded/skipped/error lines) are part of the tool's
/// normal output, so they go to stdout rather than a log file. `RUST_LOG`
/// overrides the default `info` filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .init();
}
