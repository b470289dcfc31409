//! Logging initialization: diagnostics go to stderr so stdout only ever
//! carries the rewritten sentence.
//!
//! Level precedence: `RUST_LOG`, then `--debug` / `--verbose`, then
//! `logging.level` from `tonecraft.toml`.

use tonecraft_core::config::constants::defaults;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
fn fallback_directive<'a>(flag_level: Option<&'a str>, configured: Option<&'a str>) -> &'a str {
    flag_level
        .or(configured)
        .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
}

fn build_filter(flag_level: Option<&str>, configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = fallback_directive(flag_level, configured);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL))
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(flag_level: Option<&str>, configured: Option<&str>) {
    let filter = build_filter(flag_level, configured);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
