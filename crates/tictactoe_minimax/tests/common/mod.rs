//! Shared helpers for integration tests.

#![allow(dead_code)]

use tictactoe_core::Board;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses board notation, panicking on bad test input.
pub fn board(notation: &str) -> Board {
    notation.parse().expect("valid board notation")
}
