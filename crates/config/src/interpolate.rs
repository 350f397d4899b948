//! Template substitution for `[...]`-wrapped values.
//!
//! A value is a template only when it starts with `[` and ends with `]`.
//! Inside, every `{name}` is replaced by the value collected for `name`.
//! Placeholders with no value are left in place during substitution; the
//! substituted text is then scanned again and any `{...}` still present is
//! reported. A substituted value that itself contains `{...}` text is
//! therefore reported too.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::constants::{PLACEHOLDER_PATTERN, TEMPLATE_CLOSE, TEMPLATE_OPEN};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

/// Raw values gathered in the collect pass, keyed by env key and field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvValues {
    values: HashMap<String, String>,
}

impl EnvValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under both lookup names.
    pub fn record(&mut self, env_key: &str, field_name: &str, value: &str) {
        self.values.insert(env_key.to_string(), value.to_string());
        self.values.insert(field_name.to_string(), value.to_string());
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = EnvValues::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

/// Errors raised while expanding a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("unresolved interpolation variable(s): {}", .names.join(", "))]
    Unresolved { names: Vec<String> },
}

/// Return the template interior if `raw` is wrapped in `[` `]`.
fn template_body(raw: &str) -> Option<&str> {
    raw.strip_prefix(TEMPLATE_OPEN)?.strip_suffix(TEMPLATE_CLOSE)
}

/// Expand `raw` against `values`. Unwrapped values are returned unchanged.
pub fn interpolate(raw: &str, values: &EnvValues) -> Result<String, InterpolationError> {
    let Some(template) = template_body(raw) else {
        return Ok(raw.to_string());
    };

    let result = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    });

    let names: Vec<String> = PLACEHOLDER
        .captures_iter(&result)
        .map(|caps| caps[1].to_string())
        .collect();

    if names.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(InterpolationError::Unresolved { names })
    }
}
