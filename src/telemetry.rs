//! Tracing subscriber setup.
//!
//! Library code only emits events; installing a subscriber is the host
//! application's call. These helpers cover the common case of a fmt
//! subscriber driven by RUST_LOG with a configurable fallback.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber with an "info" fallback filter.
///
/// RUST_LOG wins when it is set. Calling this more than once is harmless,
/// later calls leave the existing subscriber in place.
pub fn init() {
    init_with_filter("info");
}

/// Install a global fmt subscriber with the given fallback filter.
///
/// The filter string uses tracing-subscriber directive syntax, e.g.
/// "info" or "palaver=debug". Pass `Config::log_filter` here to honor
/// file and environment configuration.
pub fn init_with_filter(filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();
}
