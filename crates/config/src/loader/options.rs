//! Options controlling one `load` call.
//!
//! Invariants:
//! - Defaults are `.env` and required-by-default, matching `constants`.
//! - `None` and an empty path both disable file loading.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ENV_FILE, DEFAULT_REQUIRED_BY_DEFAULT};

/// Options for [`load_with`](crate::load_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Dotenv file merged into the environment before resolution.
    pub env_file: Option<PathBuf>,
    /// Required policy for fields without `required`/`omitempty` guidance.
    pub required_by_default: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            required_by_default: DEFAULT_REQUIRED_BY_DEFAULT,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this dotenv file instead of `.env`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skip dotenv loading entirely.
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    pub fn with_required_by_default(mut self, required: bool) -> Self {
        self.required_by_default = required;
        self
    }

    /// The dotenv path to merge, if file loading is enabled.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
