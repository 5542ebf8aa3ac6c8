//! Helpers shared by the registry integration tests.

#![allow(dead_code)]

use tracing_subscriber::{fmt, EnvFilter};

/// Route registry events to the test writer when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
