//! Diagnostic logging for the `shortstack` binary.
//!
//! Engine and bot events go to stderr so they never mix with game output on
//! stdout. The filter comes from `SHORTSTACK_LOG` (e.g. `debug`,
//! `shortstack_engine=debug`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHORTSTACK_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a second init (e.g. from tests) is ignored
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
