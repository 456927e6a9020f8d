// src/logging.rs
//! Optional `tracing` subscriber setup (feature `logging`)

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise the filter from [`crate::config`] is
/// used. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&crate::config::load().logging.filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}
