//! CLI command implementations.
//!
//! Every command receives an already loaded `DatabaseEnv` and writes its
//! output to the given writer.

pub mod check;
pub mod show;
pub mod url;
