//! Record description consumed by the loader.
//!
//! Responsibilities:
//! - Define the `EnvRecord` trait: a static field table plus by-name field access.
//! - Provide the `env_record!` macro that generates a struct and its `EnvRecord` impl.
//!
//! Does NOT handle:
//! - Reading or interpolating values (see `loader`).
//! - Rule evaluation (see `validate`).
//!
//! Invariants:
//! - Every name in `fields()` is accepted by both `field_mut` and `field`.
//! - `fields()` order is declaration order; the loader walks it as-is.

mod descriptor;
mod slot;

pub use descriptor::FieldDescriptor;
pub use slot::{EnvField, FieldKind, FieldSlot, FieldValue};

/// A flat configuration record populated from the environment.
///
/// Implement it by hand or through [`env_record!`](crate::env_record):
///
/// ```
/// envloader::env_record! {
///     #[derive(Debug, Default)]
///     pub struct Settings {
///         pub api_url: String { env = "API_URL", validate = "url" },
///         pub api_token: String { env = "API_TOKEN" },
///     }
/// }
/// ```
pub trait EnvRecord {
    /// Field descriptors in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Mutable handle to the named field, `None` if the record has no such field.
    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>>;

    /// Current value of the named field, `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Declare a struct together with its [`EnvRecord`] implementation.
///
/// Each field may carry an optional `{ env = "...", validate = "..." }`
/// block. Field types must implement [`EnvField`] (`String`, `i64`, `bool`).
#[macro_export]
macro_rules! env_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $( { $($key:ident = $val:expr),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::EnvRecord for $name {
            fn fields() -> &'static [$crate::FieldDescriptor] {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $(
                        $crate::FieldDescriptor::new(stringify!($field))
                            $( $( .$key($val) )* )?
                    ),*
                ];
                FIELDS
            }

            fn field_mut(&mut self, name: &str) -> Option<$crate::FieldSlot<'_>> {
                match name {
                    $( stringify!($field) => Some($crate::EnvField::slot(&mut self.$field)), )*
                    _ => None,
                }
            }

            fn field(&self, name: &str) -> Option<$crate::FieldValue<'_>> {
                match name {
                    $( stringify!($field) => Some($crate::EnvField::value(&self.$field)), )*
                    _ => None,
                }
            }
        }
    };
}
