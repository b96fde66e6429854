// Author: Dustin Pilgrim
// License: MIT

//! Maps a parsed value tree onto typed records.
//!
//! A record describes itself through a [`Schema`]: an ordered list of field
//! descriptors, each with an optional external name (the key looked up in the
//! tree), a declared [`FieldKind`] and a typed setter. Fields without an
//! external name are left at their `Default` value.
//!
//! Binding is strict: every named field must be present and shape-matching,
//! and the first failure aborts the whole call.

use std::fmt;

use tracing::trace;

use crate::ast::{Document, Section, Value};
use crate::error::{GcfgError, Result};

mod conversion;
mod kind;

pub use conversion::Bindable;
pub use kind::FieldKind;

/// Records may contain records (or sequences of records) one level deep.
pub const MAX_DEPTH: u32 = 1;

/// A type the binder can populate from a section of assignments.
///
/// Usually implemented through [`record!`](crate::record).
pub trait Record: Default + 'static {
    fn schema() -> Schema<Self>;
}

type Setter<R> = Box<dyn Fn(&mut R, &Value, u32) -> Result<()>>;

/// Per-field metadata consulted by the binder.
pub struct FieldDescriptor<R> {
    name: &'static str,
    external: Option<&'static str>,
    kind: Option<FieldKind>,
    setter: Option<Setter<R>>,
}

impl<R> FieldDescriptor<R> {
    /// Rust-side field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key looked up in the value tree, `None` for unbound fields.
    pub fn external(&self) -> Option<&'static str> {
        self.external
    }

    pub fn kind(&self) -> Option<&FieldKind> {
        self.kind.as_ref()
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("external", &self.external)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Ordered field table for a record type.
pub struct Schema<R> {
    name: &'static str,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R: Record> Schema<R> {
    pub fn new(name: &'static str) -> Self {
        Schema {
            name,
            fields: Vec::new(),
        }
    }

    /// Add a field bound to `external` in the value tree.
    pub fn field<T>(mut self, name: &'static str, external: &'static str, access: fn(&mut R) -> &mut T) -> Self
    where
        T: Bindable + 'static,
    {
        let setter: Setter<R> = Box::new(move |record: &mut R, value: &Value, depth: u32| {
            *access(record) = T::from_value(value, external, depth)?;
            Ok(())
        });
        self.fields.push(FieldDescriptor {
            name,
            external: Some(external),
            kind: Some(T::kind()),
            setter: Some(setter),
        });
        self
    }

    /// Add a field the binder never touches.
    pub fn unbound(mut self, name: &'static str) -> Self {
        self.fields.push(FieldDescriptor {
            name,
            external: None,
            kind: None,
            setter: None,
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }

    /// One line per field: `name -> "external": kind`.
    pub fn describe(&self) -> String {
        let mut out = format!("{}\n", self.name);
        for field in &self.fields {
            match (field.external, &field.kind) {
                (Some(external), Some(kind)) => {
                    out.push_str(&format!("  {} -> \"{}\": {}\n", field.name, external, kind));
                }
                _ => out.push_str(&format!("  {} (unbound)\n", field.name)),
            }
        }
        out
    }

    /// Fill `record` from `entries`, field by field, in schema order.
    fn apply(&self, record: &mut R, entries: &Section, depth: u32) -> Result<()> {
        trace!(record = self.name, depth, "binding record");

        for field in &self.fields {
            let (Some(external), Some(kind), Some(setter)) = (field.external, &field.kind, &field.setter) else {
                continue;
            };

            if !kind.is_bindable() {
                return Err(GcfgError::UnsupportedKind {
                    field: external.to_string(),
                    kind: kind.to_string(),
                    hint: Some("Supported: integers, string, bool, sequences, records and pairs".into()),
                    code: Some(405),
                });
            }

            let value = entries.get(external).ok_or_else(|| GcfgError::TypeMismatch {
                field: external.to_string(),
                expected: kind.to_string(),
                found: "nothing".into(),
                hint: Some(format!("Every field of {} must be set", self.name)),
                code: Some(402),
            })?;

            trace!(field = external, kind = %kind, "binding field");
            setter(record, value, depth)?;
        }

        Ok(())
    }
}

impl<R: Record> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Build a fresh `R` from a section at the given depth.
pub fn bind_section<R: Record>(section: &Section, depth: u32) -> Result<R> {
    let mut record = R::default();
    R::schema().apply(&mut record, section, depth)?;
    Ok(record)
}

/// Build a nested record from a `Section` value, enforcing the depth limit.
pub fn bind_nested<R: Record>(value: &Value, field: &str, depth: u32) -> Result<R> {
    if depth >= MAX_DEPTH {
        return Err(nesting_error(field));
    }
    let Value::Section(section) = value else {
        return Err(GcfgError::type_mismatch(field, format!("section for {}", R::schema().name()), value.kind_name()));
    };
    bind_section(section, depth + 1)
}

/// Bind a whole document into a new `R`.
pub fn bind<R: Record>(doc: &Document) -> Result<R> {
    bind_section(&doc.items, 0)
}

pub(crate) fn nesting_error(field: &str) -> GcfgError {
    GcfgError::NestingTooDeep {
        field: field.to_string(),
        limit: MAX_DEPTH,
        hint: Some("Nested sections may not contain further sections".into()),
        code: Some(404),
    }
}

/// Implement [`Record`] and [`Bindable`] for a plain struct.
///
/// ```
/// #[derive(Debug, Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     cache: Vec<u8>,
/// }
///
/// gcfg::record!(Server {
///     host => "host",
///     port => "port",
///     cache => _,
/// });
///
/// let server: Server = gcfg::from_str(r#"host = "localhost" port = 8080"#).unwrap();
/// assert_eq!(server.port, 8080);
/// ```
#[macro_export]
macro_rules! record {
    (@field $schema:expr, $ty:ident, $field:ident, _) => {
        $schema.unbound(stringify!($field))
    };
    (@field $schema:expr, $ty:ident, $field:ident, $key:literal) => {
        $schema.field(stringify!($field), $key, |r: &mut $ty| &mut r.$field)
    };
    ($ty:ident { $($field:ident => $key:tt),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn schema() -> $crate::Schema<Self> {
                let schema = $crate::Schema::new(stringify!($ty));
                $(let schema = $crate::record!(@field schema, $ty, $field, $key);)*
                schema
            }
        }

        impl $crate::Bindable for $ty {
            fn kind() -> $crate::FieldKind {
                $crate::FieldKind::Record(stringify!($ty))
            }

            fn from_value(value: &$crate::Value, field: &str, depth: u32) -> $crate::Result<Self> {
                $crate::binder::bind_nested::<Self>(value, field, depth)
            }

            fn from_section(section: &$crate::Section, _field: &str, depth: u32) -> $crate::Result<Self> {
                $crate::binder::bind_section::<Self>(section, depth)
            }
        }
    };
}
