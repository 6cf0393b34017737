//! Diagnostic logging for the validator binary.
//!
//! Logs go to stderr so stdout carries only the report.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a given `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed when embedded; keep the existing one.
    if let Err(e) = fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
    {
        tracing::debug!("keeping existing tracing subscriber: {e}");
    }
}
