//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the settings record with the options chosen on the command line.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup and process exit (see `main()`).
//!
//! Invariants:
//! - Settings are loaded exactly once per invocation, before any command runs.

use anyhow::{Context, Result};
use std::io::Write;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;
use crate::settings::DatabaseEnv;

/// Load settings and dispatch the command.
pub(crate) fn run_command(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    let options = cli.load_options();
    let env: DatabaseEnv =
        envloader::from_env(&options).context("Failed to load database settings")?;

    match cli.command {
        Commands::Url { show_token } => commands::url::run(&env, show_token, out),
        Commands::Check => commands::check::run(&env, out),
        Commands::Show => commands::show::run(&env, out),
    }
}
