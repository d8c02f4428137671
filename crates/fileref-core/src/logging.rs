//! Shared logging initialization for fileref binaries.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// Log level requested via `FILEREF_LOG`, or `None` for `off`.
fn level_from_env() -> Option<tracing::Level> {
    let requested = std::env::var("FILEREF_LOG").unwrap_or_default();
    match requested.trim().to_ascii_lowercase().as_str() {
        "off" => None,
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => Some(tracing::Level::INFO),
    }
}

/// Initialize process-level tracing output from `FILEREF_LOG`.
///
/// Safe to call multiple times; only the first call installs the
/// subscriber, and installation failures (for example a subscriber already
/// set by a test harness) are ignored.
pub fn init() {
    if INIT.set(()).is_err() {
        return;
    }
    let Some(level) = level_from_env() else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
