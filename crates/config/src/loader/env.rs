//! Environment variable access for the resolver.
//!
//! Invariants:
//! - Unset and empty variables are both treated as "no value".
//! - Values are returned verbatim; surrounding whitespace is significant.
//! - Non-unicode values are an error, not a silent miss.

use std::env::VarError;

use super::error::LoadError;

/// Read `key`, returning `None` if it is unset or empty.
pub fn raw_env_value(key: &str) -> Result<Option<String>, LoadError> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(LoadError::InvalidUnicode {
            var: key.to_string(),
        }),
    }
}
