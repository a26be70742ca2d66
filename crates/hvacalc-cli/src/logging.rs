//! Logging setup
//!
//! Filter precedence: HVACALC_LOG, then `--verbose` (debug), then the
//! configured level. Logs go to stderr so JSON on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "HVACALC_LOG";

/// Initialize the global subscriber
pub fn init(config_level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { config_level };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
