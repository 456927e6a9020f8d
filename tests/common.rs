// tests/common.rs
//! Shared test utilities: test-friendly logging setup and fixed inputs

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // captured by `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// All-zero key, the simplest valid key
#[allow(dead_code)]
pub const ZERO_KEY: [u8; 32] = [0u8; 32];

/// All-zero IV
#[allow(dead_code)]
pub const ZERO_IV: [u8; 16] = [0u8; 16];
