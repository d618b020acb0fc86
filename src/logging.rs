//! Logging setup using the `tracing` ecosystem.
//!
//! Everything goes to stderr: stdout carries the filtered file content.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, overriding `-v`
pub const LOG_ENV: &str = "GIT_KEYWORDS_LOG";

/// Level directive for a `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
