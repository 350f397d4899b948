//! Tests for the record loader.
//!
//! Responsibilities:
//! - Test dotenv merging, including precedence and secret-safe errors.
//! - Test the required policy and its fail-fast behavior.
//! - Test interpolation between sibling fields across both passes.
//! - Test validation aggregation and unsupported field kinds.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
