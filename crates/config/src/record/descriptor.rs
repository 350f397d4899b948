//! Static per-field descriptors.
//!
//! Responsibilities:
//! - Describe one record field: its name, environment key override, and validate tag.
//! - Derive the environment key and the required policy from those declarations.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader::env`).
//! - Evaluating validation rules (see `validate`).
//!
//! Invariants:
//! - Descriptors are `const`-constructible so record tables can live in statics.
//! - The environment key defaults to the field name verbatim (no case folding).

use crate::validate::Rule;

/// Declarative description of one field of an [`EnvRecord`](super::EnvRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier as declared on the record.
    pub name: &'static str,
    /// Explicit environment key; `None` falls back to `name`.
    pub env: Option<&'static str>,
    /// Comma-separated validation tokens, e.g. `"omitempty,url"`.
    pub validate: &'static str,
}

impl FieldDescriptor {
    /// Create a descriptor with no overrides and an empty validate tag.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            env: None,
            validate: "",
        }
    }

    /// Override the environment key.
    pub const fn env(mut self, key: &'static str) -> Self {
        self.env = Some(key);
        self
    }

    /// Attach a validate tag.
    pub const fn validate(mut self, tag: &'static str) -> Self {
        self.validate = tag;
        self
    }

    /// Environment key looked up for this field.
    pub fn env_key(&self) -> &'static str {
        match self.env {
            Some(key) if !key.is_empty() => key,
            _ => self.name,
        }
    }

    /// Parsed validation rules, in declaration order.
    pub fn rules(&self) -> Vec<Rule> {
        Rule::parse_tag(self.validate)
    }

    /// Decide whether an empty value for this field is fatal.
    ///
    /// A `required` token wins over `omitempty`; with neither present the
    /// caller's default applies.
    pub fn is_required(&self, required_by_default: bool) -> bool {
        let rules = self.rules();
        if rules.is_empty() {
            return required_by_default;
        }
        if rules.contains(&Rule::Required) {
            return true;
        }
        if rules.contains(&Rule::OmitEmpty) {
            return false;
        }
        required_by_default
    }
}
