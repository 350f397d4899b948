//! Show command implementation.
//!
//! Responsibilities:
//! - List each setting with its environment key and current value.
//!
//! Invariants / Assumptions:
//! - The token, and the URL that embeds it, are masked.

use anyhow::Result;
use envloader::{EnvRecord, FieldValue};
use std::io::Write;

use crate::error::ExitCode;
use crate::settings::{DatabaseEnv, redact};

/// Fields whose values embed the auth token.
const SECRET_FIELDS: [&str; 2] = ["db_token", "database_url"];

/// Run the show command.
pub fn run(env: &DatabaseEnv, out: &mut impl Write) -> Result<ExitCode> {
    for descriptor in DatabaseEnv::fields() {
        let value = match env.field(descriptor.name) {
            Some(FieldValue::Str(value)) => value.to_string(),
            Some(other) => format!("{other:?}"),
            None => continue,
        };
        let shown = if SECRET_FIELDS.contains(&descriptor.name) {
            redact(&value)
        } else {
            value
        };
        writeln!(out, "{} ({}) = {}", descriptor.name, descriptor.env_key(), shown)?;
    }
    Ok(ExitCode::Success)
}
