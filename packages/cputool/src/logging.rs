use std::io;

use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is not set or cannot be parsed.
const DEFAULT_FILTER: &str = "warn";

/// Installs a `tracing` subscriber that writes to standard error, filtered by `RUST_LOG`.
///
/// Call once, at the start of `main()`. Standard output stays reserved for tool output.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)] // Global side effect, exercised by running the binaries.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
