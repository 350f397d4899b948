//! Typed configuration records loaded from the environment.
//!
//! This crate populates flat string records from process environment
//! variables, optionally seeded from a dotenv file. Values wrapped in
//! `[...]` may reference sibling fields with `{NAME}` placeholders, and the
//! populated record is checked against per-field validation rules.
//!
//! ```no_run
//! use envloader::{LoadOptions, env_record, load_with};
//!
//! env_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Settings {
//!         pub db_name: String { env = "DB_NAME" },
//!         pub db_url: String { env = "DB_URL", validate = "omitempty,url" },
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! load_with(&mut settings, &LoadOptions::default()).expect("configuration");
//! ```

pub mod constants;
pub mod interpolate;
mod loader;
mod record;
pub mod validate;

pub use interpolate::{EnvValues, InterpolationError, interpolate};
pub use loader::{
    LoadError, LoadOptions, dotenv_disabled, from_env, load, load_with, merge_env_file,
    must_load, must_load_with, raw_env_value,
};
pub use record::{EnvField, EnvRecord, FieldDescriptor, FieldKind, FieldSlot, FieldValue};
pub use validate::{Rule, ValidationError, Violation, validate};
