//! Centralized constants for the environment loader.
//!
//! This module contains default values shared by the loader and the CLI
//! so that paths and variable names are spelled out in one place.

// =============================================================================
// Source Merge Defaults
// =============================================================================

/// Default dotenv file consulted when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variable that, when set to `1` or `true`, disables dotenv file loading.
///
/// Used by test suites to keep a developer's local `.env` out of the run.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Field Policy Defaults
// =============================================================================

/// Whether fields without explicit `required`/`omitempty` guidance are required.
pub const DEFAULT_REQUIRED_BY_DEFAULT: bool = true;

// =============================================================================
// Interpolation Syntax
// =============================================================================

/// Opening delimiter that marks a value as an interpolation template.
pub const TEMPLATE_OPEN: char = '[';

/// Closing delimiter that marks a value as an interpolation template.
pub const TEMPLATE_CLOSE: char = ']';

/// Pattern matching one `{identifier}` placeholder; group 1 is the identifier.
pub const PLACEHOLDER_PATTERN: &str = r"\{([^}]+)\}";
