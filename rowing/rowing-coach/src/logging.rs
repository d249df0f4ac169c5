//! Tracing setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a tracing filter (e.g. `rowing_feedback=debug`).
pub const LOG_ENV: &str = "ROWING_LOG";

/// Install the stderr subscriber.
///
/// `ROWING_LOG` wins when it parses; otherwise the level follows `-v` count.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}

const fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
