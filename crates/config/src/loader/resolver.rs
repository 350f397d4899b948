//! Two-pass field resolution.
//!
//! Responsibilities:
//! - Merge the dotenv file, then populate a record from the environment.
//! - Collect every raw value before resolving any (pass 1), so templates can
//!   reference sibling fields regardless of declaration order.
//! - Enforce the required policy, interpolate, and assign (pass 2).
//! - Run the validator over the populated record.
//!
//! Does NOT handle:
//! - Template syntax (see `interpolate`).
//! - Rule semantics (see `validate`).
//!
//! Invariants / Assumptions:
//! - Each variable is read once per call; pass 2 works from pass 1's snapshot.
//! - A missing required variable fails fast, before any validation.
//! - Every descriptor must name a field the record exposes, set or not.
//! - On error the record is partially populated and must be discarded.

use super::dotenv::merge_env_file;
use super::env::raw_env_value;
use super::error::LoadError;
use super::options::LoadOptions;
use crate::interpolate::{EnvValues, interpolate};
use crate::record::{EnvRecord, FieldDescriptor, FieldSlot};
use crate::validate::validate;

/// Load `target` using [`LoadOptions::default`].
pub fn load<T: EnvRecord>(target: &mut T) -> Result<(), LoadError> {
    load_with(target, &LoadOptions::default())
}

/// Merge the dotenv file named by `options`, then populate and validate `target`.
pub fn load_with<T: EnvRecord>(target: &mut T, options: &LoadOptions) -> Result<(), LoadError> {
    merge_env_file(options.env_file())?;
    resolve_fields(target, options)?;
    validate(target)?;
    Ok(())
}

/// Build a fresh record and load it.
pub fn from_env<T: EnvRecord + Default>(options: &LoadOptions) -> Result<T, LoadError> {
    let mut record = T::default();
    load_with(&mut record, options)?;
    Ok(record)
}

/// Like [`load`], but panics on any error.
pub fn must_load<T: EnvRecord>(target: &mut T) {
    if let Err(e) = load(target) {
        panic!("{e}");
    }
}

/// Like [`load_with`], but panics on any error.
pub fn must_load_with<T: EnvRecord>(target: &mut T, options: &LoadOptions) {
    if let Err(e) = load_with(target, options) {
        panic!("{e}");
    }
}

/// Raw value snapshot for one field, taken in pass 1.
struct Collected {
    descriptor: &'static FieldDescriptor,
    raw: Option<String>,
}

fn resolve_fields<T: EnvRecord>(target: &mut T, options: &LoadOptions) -> Result<(), LoadError> {
    // Pass 1: collect every raw value.
    let mut values = EnvValues::new();
    let mut collected = Vec::with_capacity(T::fields().len());
    for descriptor in T::fields() {
        let env_key = descriptor.env_key();
        let raw = raw_env_value(env_key)?;
        if let Some(ref value) = raw {
            values.record(env_key, descriptor.name, value);
        }
        collected.push(Collected { descriptor, raw });
    }

    // Pass 2: required policy, interpolation, assignment.
    for Collected { descriptor, raw } in collected {
        let env_key = descriptor.env_key();
        if target.field(descriptor.name).is_none() {
            return Err(LoadError::InvalidTarget {
                field: descriptor.name.to_string(),
            });
        }
        let Some(raw) = raw else {
            if descriptor.is_required(options.required_by_default) {
                return Err(LoadError::MissingRequired(env_key.to_string()));
            }
            tracing::debug!(field = descriptor.name, env = env_key, "optional field unset");
            continue;
        };

        let value = interpolate(&raw, &values).map_err(|source| LoadError::Interpolation {
            var: env_key.to_string(),
            source,
        })?;

        assign(target, descriptor, value)?;
        tracing::debug!(field = descriptor.name, env = env_key, "resolved field");
    }

    Ok(())
}

fn assign<T: EnvRecord>(
    target: &mut T,
    descriptor: &FieldDescriptor,
    value: String,
) -> Result<(), LoadError> {
    match target.field_mut(descriptor.name) {
        Some(FieldSlot::Str(slot)) => {
            *slot = value;
            Ok(())
        }
        Some(slot) => Err(LoadError::UnsupportedFieldKind {
            field: descriptor.name.to_string(),
            kind: slot.kind(),
        }),
        None => Err(LoadError::InvalidTarget {
            field: descriptor.name.to_string(),
        }),
    }
}
