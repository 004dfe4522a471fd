//! Tracing subscriber initialization for binaries.
//!
//! Library crates emit `tracing` events but never install a subscriber;
//! that stays an application decision.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, honoring `RUST_LOG` with an `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
