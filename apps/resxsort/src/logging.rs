//! Tracing subscriber setup for the binary.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Env var that overrides the log filter (tracing `EnvFilter` syntax).
pub const LOG_ENV: &str = "RESXSORT_LOG";

/// Install a stderr subscriber. `verbose` raises the default level from
/// `warn` to `debug`; `RESXSORT_LOG` wins over both.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
