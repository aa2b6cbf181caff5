//! Process-wide log setup
//!
//! Logs go to stderr so the report on stdout stays clean.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "brew_compat=debug"
    } else {
        "brew_compat=info"
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit,
/// dropping it flushes buffered log lines.
pub fn init(verbose: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose))),
        )
        .with_writer(writer)
        .with_target(false)
        .init();

    guard
}
