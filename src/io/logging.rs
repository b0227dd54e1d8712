//! Tracing subscriber setup for the CLI

use crate::io::configuration::{
    DEFAULT_LOG_LEVEL, LOG_ENV_VAR, QUIET_LOG_LEVEL, VERBOSE_LOG_LEVEL,
};
use tracing_subscriber::EnvFilter;

/// Filter directive used when the environment does not provide one
pub const fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => QUIET_LOG_LEVEL,
        (false, true) => VERBOSE_LOG_LEVEL,
        (false, false) => DEFAULT_LOG_LEVEL,
    }
}

/// Build the event filter, preferring `DRAWABLEGEN_LOG` when it parses
pub fn build_filter(quiet: bool, verbose: bool) -> EnvFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(quiet, verbose)))
}

/// Install a stderr fmt subscriber as the global default
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one is kept.
pub fn init(quiet: bool, verbose: bool) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(quiet, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
