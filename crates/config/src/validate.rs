//! Declarative field validation.
//!
//! Responsibilities:
//! - Parse validate tags (`"omitempty,url"`) into `Rule`s.
//! - Evaluate every rule of every field of a populated record.
//! - Aggregate all violations into one `ValidationError`.
//!
//! Does NOT handle:
//! - Required-policy enforcement during loading (see `loader::resolver`).
//!   The `required` rule here re-checks the final value only.
//!
//! Invariants:
//! - Validation is a pure function of the record; compiled patterns are
//!   built once on first use and only read afterwards.
//! - `omitempty` skips the remaining rules of a field whose value is zero.
//! - Unknown tokens are reported as violations, never ignored.
//! - A field reports at most one violation, for its first failed rule.
//! - `url` needs a host, an opaque part or a fragment, not just a scheme.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::record::{EnvRecord, FieldValue};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// One validation token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-zero.
    Required,
    /// Skip the remaining rules when the value is zero.
    OmitEmpty,
    /// Value must parse as an absolute URL.
    Url,
    /// Value must look like an email address.
    Email,
    /// Token this crate does not know; always fails.
    Unknown(String),
}

impl Rule {
    /// Parse a comma-separated validate tag. Blank tokens are dropped.
    pub fn parse_tag(tag: &str) -> Vec<Rule> {
        tag.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Rule::from_token)
            .collect()
    }

    fn from_token(token: &str) -> Rule {
        match token {
            "required" => Rule::Required,
            "omitempty" => Rule::OmitEmpty,
            "url" => Rule::Url,
            "email" => Rule::Email,
            other => Rule::Unknown(other.to_string()),
        }
    }

    /// Token spelling of this rule.
    pub fn token(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::OmitEmpty => "omitempty",
            Rule::Url => "url",
            Rule::Email => "email",
            Rule::Unknown(token) => token,
        }
    }

    /// Check `value`; `false` means a violation.
    fn check(&self, value: &FieldValue<'_>) -> bool {
        match self {
            Rule::Required => !value.is_zero(),
            Rule::OmitEmpty => true,
            Rule::Url => value.as_str().is_some_and(is_valid_url),
            Rule::Email => value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)),
            Rule::Unknown(_) => false,
        }
    }
}

fn is_valid_url(raw: &str) -> bool {
    // `Url::parse` only accepts absolute URLs, so a scheme is guaranteed.
    let Ok(url) = url::Url::parse(raw) else {
        return false;
    };
    if url.scheme() == "file" {
        return !matches!(url.path(), "" | "/");
    }
    url.host_str().is_some_and(|host| !host.is_empty())
        || (url.cannot_be_a_base() && !url.path().is_empty())
        || url.fragment().is_some_and(|fragment| !fragment.is_empty())
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Rule::Required => write!(f, "field '{}' is required", self.field),
            Rule::Url => write!(f, "field '{}' must be a valid URL", self.field),
            Rule::Email => write!(f, "field '{}' must be a valid email address", self.field),
            rule => write!(f, "field '{}' failed rule '{}'", self.field, rule.token()),
        }
    }
}

/// All violations found in one record. Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed:\n{}", render(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Whether any violation concerns `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("- {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run every field's rules against `record`.
pub fn validate<T: EnvRecord>(record: &T) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    for descriptor in T::fields() {
        let Some(value) = record.field(descriptor.name) else {
            // The loader reports unknown fields before validation runs.
            continue;
        };

        for rule in descriptor.rules() {
            if rule == Rule::OmitEmpty && value.is_zero() {
                break;
            }
            if !rule.check(&value) {
                // One violation per field: the first failed rule.
                violations.push(Violation {
                    field: descriptor.name,
                    rule,
                });
                break;
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = violations.len(), "record failed validation");
        Err(ValidationError { violations })
    }
}
