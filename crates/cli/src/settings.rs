//! Database settings record and connection URL composition.
//!
//! Responsibilities:
//! - Declare the environment-backed settings record for the libSQL demo.
//! - Compose the libSQL connection URL from its parts.
//! - Keep the auth token out of logs and default output.
//!
//! Does NOT handle:
//! - Loading the record (see `envloader`).
//! - Opening database connections.

use envloader::env_record;
use secrecy::{ExposeSecret, SecretString};

/// Region-qualified host suffix of hosted libSQL databases.
pub const LIBSQL_HOST_SUFFIX: &str = "aws-us-east-1.turso.io";

env_record! {
    /// Database settings read from the environment.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct DatabaseEnv {
        /// Full connection URL, usually a template over the other fields.
        pub database_url: String { env = "DB_URL", validate = "omitempty,url" },
        pub db_token: String { env = "DB_TOKEN" },
        pub db_name: String { env = "DB_NAME" },
        pub db_turso_user: String { env = "DB_TURSO_USER" },
    }
}

/// A libSQL endpoint with its auth token held as a secret.
pub struct ConnectionTarget {
    host: String,
    token: SecretString,
}

impl ConnectionTarget {
    pub fn from_env(env: &DatabaseEnv) -> Self {
        Self {
            host: format!(
                "{}-{}.{}",
                env.db_name, env.db_turso_user, LIBSQL_HOST_SUFFIX
            ),
            token: SecretString::new(env.db_token.clone().into()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Connection URL including the real token.
    pub fn url(&self) -> String {
        format!(
            "libsql://{}?authToken={}",
            self.host,
            self.token.expose_secret()
        )
    }

    /// Connection URL with the token masked.
    pub fn redacted_url(&self) -> String {
        format!("libsql://{}?authToken=***", self.host)
    }

    /// Whether `candidate` is exactly this target's URL.
    pub fn matches(&self, candidate: &str) -> bool {
        self.url() == candidate
    }
}

/// Mask a secret for display, keeping only its length visible.
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "*".repeat(secret.chars().count().min(8))
    }
}
