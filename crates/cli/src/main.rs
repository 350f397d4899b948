//! envloader CLI - load database settings from the environment.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the settings record through `envloader` and run the chosen command.
//! - Print errors and exit with a structured exit code.
//!
//! Does NOT handle:
//! - Connecting to the database; this binary only derives connection details.
//!
//! Invariants:
//! - Logs go to stderr so stdout carries command output only.

mod args;
mod commands;
mod dispatch;
mod error;
mod settings;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout().lock();
    let code = match run_command(&cli, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    let _ = stdout.flush();
    std::process::exit(code.as_i32());
}
