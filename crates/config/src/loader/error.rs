//! Error types for record loading.
//!
//! Responsibilities:
//! - Define one error variant per failure stage of a `load` call.
//! - Carry enough context (variable names, paths) to act on the error.
//!
//! Does NOT handle:
//! - Formatting of individual validation violations (see `validate`).
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - No variant carries a resolved or raw field value.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::interpolate::InterpolationError;
use crate::record::FieldKind;
use crate::validate::ValidationError;

/// Errors that can occur while loading a record.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to parse the dotenv file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse env file {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip env file loading",
        .path.display()
    )]
    EnvFileParse { path: PathBuf, error_index: usize },

    /// Failed to read the dotenv file due to an I/O error.
    #[error("Failed to read env file {}: {kind}", .path.display())]
    EnvFileIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load env file {}", .path.display())]
    EnvFileUnknown { path: PathBuf },

    #[error("Missing required environment variable: {0}")]
    MissingRequired(String),

    #[error("Environment variable {var} is not valid unicode")]
    InvalidUnicode { var: String },

    #[error("Failed to interpolate {var}: {source}")]
    Interpolation {
        var: String,
        #[source]
        source: InterpolationError,
    },

    #[error("Cannot assign field {field}: unsupported field type {kind}")]
    UnsupportedFieldKind { field: String, kind: FieldKind },

    #[error("Record does not expose field {field} named in its field table")]
    InvalidTarget { field: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Unresolved placeholder names, when this is an interpolation failure.
    pub fn unresolved_names(&self) -> Option<&[String]> {
        match self {
            LoadError::Interpolation {
                source: InterpolationError::Unresolved { names },
                ..
            } => Some(names),
            _ => None,
        }
    }
}
