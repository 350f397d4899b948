//! Shared test utilities for envloader-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a complete, consistent set of database settings.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Host values for DB_* variables never reach the child process.

#![allow(dead_code)]

use assert_cmd::Command;

/// Settings variables read by the CLI.
pub const DB_VARS: [&str; 4] = ["DB_URL", "DB_TOKEN", "DB_NAME", "DB_TURSO_USER"];

/// URL composed from the values set by `with_settings`.
pub const EXPECTED_URL: &str = "libsql://app-alice.aws-us-east-1.turso.io?authToken=test-token";

/// Returns a hermetic `envloader-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All DB_* variables and `ENVLOADER_ENV_FILE` are cleared.
pub fn cli_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envloader-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("ENVLOADER_ENV_FILE");
    for var in DB_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Sets DB_TOKEN, DB_NAME and DB_TURSO_USER to fixed test values.
pub fn with_settings(cmd: &mut Command) -> &mut Command {
    cmd.env("DB_TOKEN", "test-token")
        .env("DB_NAME", "app")
        .env("DB_TURSO_USER", "alice")
}
