//! Typed views onto record fields.
//!
//! `FieldSlot` is handed out for assignment, `FieldValue` for validation.
//! Only string fields can be assigned; integer and boolean fields are
//! declarable so that records can describe them, but the loader refuses to
//! coerce into them.

use std::fmt;

/// Storage kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Mutable handle to one field.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Str(&'a mut String),
    Int(&'a mut i64),
    Bool(&'a mut bool),
}

impl FieldSlot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldSlot::Str(_) => FieldKind::String,
            FieldSlot::Int(_) => FieldKind::Integer,
            FieldSlot::Bool(_) => FieldKind::Boolean,
        }
    }
}

/// Shared view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
}

impl FieldValue<'_> {
    /// True for `""`, `0` and `false`.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
            FieldValue::Bool(b) => !*b,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Field types that may appear in an [`env_record!`](crate::env_record) struct.
pub trait EnvField {
    fn slot(&mut self) -> FieldSlot<'_>;
    fn value(&self) -> FieldValue<'_>;
}

impl EnvField for String {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Str(self)
    }

    fn value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl EnvField for i64 {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Int(self)
    }

    fn value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }
}

impl EnvField for bool {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Bool(self)
    }

    fn value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}
