//! Dotenv source merge.
//!
//! Responsibilities:
//! - Merge an optional dotenv file into the process environment.
//! - Translate dotenvy failures into secret-free `LoadError`s.
//!
//! Invariants / Assumptions:
//! - Variables already present in the process environment are never overwritten.
//! - A missing file is not an error.
//! - The `DOTENV_DISABLED` variable is checked before any file is opened.
//! - The file is read fully within the call; no handle outlives it.

use std::path::Path;

use super::error::LoadError;
use crate::constants::DOTENV_DISABLED_VAR;

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Merge `path` into the process environment.
///
/// Missing files and `path == None` are silently ignored.
///
/// # Errors
///
/// - `LoadError::EnvFileParse` if the file has invalid syntax.
/// - `LoadError::EnvFileIo` if the file exists but cannot be read.
pub fn merge_env_file(path: Option<&Path>) -> Result<(), LoadError> {
    let Some(path) = path else {
        return Ok(());
    };

    if dotenv_disabled() {
        tracing::debug!(path = %path.display(), "env file loading disabled");
        return Ok(());
    }

    if !path.exists() {
        tracing::debug!(path = %path.display(), "env file not found, skipping");
        return Ok(());
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "merged env file");
            Ok(())
        }
        Err(dotenvy::Error::LineParse(_, idx)) => Err(LoadError::EnvFileParse {
            path: path.to_path_buf(),
            error_index: idx,
        }),
        Err(dotenvy::Error::Io(io_err)) => Err(LoadError::EnvFileIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        }),
        Err(_) => Err(LoadError::EnvFileUnknown {
            path: path.to_path_buf(),
        }),
    }
}
