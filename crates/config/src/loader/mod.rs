//! Record loader for environment variables and dotenv files.
//!
//! Responsibilities:
//! - Merge an optional dotenv file into the process environment.
//! - Populate an `EnvRecord` in two passes, with interpolation between fields.
//! - Validate the populated record and surface a single error on failure.
//!
//! Does NOT handle:
//! - Describing records (see `record`).
//! - Reloading or persisting loaded values.
//!
//! Invariants / Assumptions:
//! - Existing process variables take precedence over dotenv file values.
//! - The `DOTENV_DISABLED` variable is checked before any file is opened.
//! - `load` needs exclusive access to the record and, by convention, to the
//!   process environment for the duration of the call.

mod dotenv;
mod env;
mod error;
mod options;
mod resolver;

#[cfg(test)]
mod tests;

pub use dotenv::{dotenv_disabled, merge_env_file};
pub use env::raw_env_value;
pub use error::LoadError;
pub use options::LoadOptions;
pub use resolver::{from_env, load, load_with, must_load, must_load_with};
