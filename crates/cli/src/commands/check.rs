//! Check command implementation.
//!
//! Responsibilities:
//! - Compare `DB_URL` with the URL derived from the other settings.
//!
//! Invariants / Assumptions:
//! - An unset `DB_URL` counts as a mismatch.
//! - Neither URL is printed; the token is part of both.

use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::error::ExitCode;
use crate::settings::{ConnectionTarget, DatabaseEnv};

/// Run the check command.
pub fn run(env: &DatabaseEnv, out: &mut impl Write) -> Result<ExitCode> {
    let target = ConnectionTarget::from_env(env);

    if env.database_url.is_empty() {
        info!("DB_URL is not set");
        writeln!(out, "mismatch: DB_URL is not set")?;
        return Ok(ExitCode::GeneralError);
    }

    if target.matches(&env.database_url) {
        writeln!(out, "match")?;
        Ok(ExitCode::Success)
    } else {
        writeln!(out, "mismatch: DB_URL differs from {}", target.redacted_url())?;
        Ok(ExitCode::GeneralError)
    }
}
