//! Url command implementation.
//!
//! Responsibilities:
//! - Print the libSQL connection URL derived from the loaded settings.
//!
//! Invariants / Assumptions:
//! - The auth token is masked unless the caller opts in with `--show-token`.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::error::ExitCode;
use crate::settings::{ConnectionTarget, DatabaseEnv};

/// Run the url command.
pub fn run(env: &DatabaseEnv, show_token: bool, out: &mut impl Write) -> Result<ExitCode> {
    let target = ConnectionTarget::from_env(env);
    debug!(host = target.host(), "derived connection target");

    if show_token {
        writeln!(out, "{}", target.url())?;
    } else {
        writeln!(out, "{}", target.redacted_url())?;
    }
    Ok(ExitCode::Success)
}
