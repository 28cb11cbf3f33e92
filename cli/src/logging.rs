//! Tracing setup shared by both binaries.
//!
//! Logs go to stderr so stdout carries nothing but the JSON result.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
