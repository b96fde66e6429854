// Author: Dustin Pilgrim
// License: MIT

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use super::{nesting_error, FieldKind, MAX_DEPTH};
use crate::ast::{Section, Value};
use crate::error::{GcfgError, Result};

/// A type that can be produced from one entry of the value tree.
pub trait Bindable: Sized {
    /// Declared kind reported to the binder.
    fn kind() -> FieldKind;

    /// Convert `value`, found under `field`, at nesting `depth`.
    fn from_value(value: &Value, field: &str, depth: u32) -> Result<Self>;

    /// Build from one section of an array section. Only records accept this.
    fn from_section(_section: &Section, field: &str, _depth: u32) -> Result<Self> {
        Err(GcfgError::type_mismatch(field, Self::kind().to_string(), "section"))
    }
}

fn parse_integer<T>(text: &str, field: &str, target: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => GcfgError::OutOfRange {
            field: field.to_string(),
            value: text.to_string(),
            target: target.to_string(),
            hint: Some(format!("Use a value that fits in {}", target)),
            code: Some(403),
        },
        _ => GcfgError::InvalidInteger {
            field: field.to_string(),
            value: text.to_string(),
            hint: None,
            code: Some(406),
        },
    })
}

macro_rules! bindable_int {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl Bindable for $t {
            fn kind() -> FieldKind {
                FieldKind::$variant { bits: <$t>::BITS }
            }

            fn from_value(value: &Value, field: &str, _depth: u32) -> Result<Self> {
                match value {
                    Value::Integer(text) => parse_integer::<$t>(text, field, stringify!($t)),
                    other => Err(GcfgError::type_mismatch(field, "integer", other.kind_name())),
                }
            }
        }
    )*};
}

bindable_int! {
    i8 => Int, i16 => Int, i32 => Int, i64 => Int, isize => Int,
    u8 => Uint, u16 => Uint, u32 => Uint, u64 => Uint, usize => Uint,
}

impl Bindable for String {
    fn kind() -> FieldKind {
        FieldKind::Str
    }

    fn from_value(value: &Value, field: &str, _depth: u32) -> Result<Self> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            other => Err(GcfgError::type_mismatch(field, "string", other.kind_name())),
        }
    }
}

impl Bindable for bool {
    fn kind() -> FieldKind {
        FieldKind::Bool
    }

    fn from_value(value: &Value, field: &str, _depth: u32) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(GcfgError::type_mismatch(field, "bool", other.kind_name())),
        }
    }
}

impl Bindable for f64 {
    fn kind() -> FieldKind {
        FieldKind::Float { bits: 64 }
    }

    /// Floats take float literals and widen integer literals.
    fn from_value(value: &Value, field: &str, _depth: u32) -> Result<Self> {
        match value {
            Value::Float(n) => Ok(*n),
            Value::Integer(text) => text.parse::<f64>().map_err(|_| GcfgError::InvalidInteger {
                field: field.to_string(),
                value: text.clone(),
                hint: None,
                code: Some(406),
            }),
            other => Err(GcfgError::type_mismatch(field, "float", other.kind_name())),
        }
    }
}

impl Bindable for f32 {
    fn kind() -> FieldKind {
        FieldKind::Float { bits: 32 }
    }

    fn from_value(value: &Value, field: &str, depth: u32) -> Result<Self> {
        let wide = f64::from_value(value, field, depth)?;
        let narrow = wide as f32;
        if wide.is_finite() && !narrow.is_finite() {
            return Err(GcfgError::OutOfRange {
                field: field.to_string(),
                value: wide.to_string(),
                target: "f32".to_string(),
                hint: Some("Use a value that fits in f32".into()),
                code: Some(403),
            });
        }
        Ok(narrow)
    }
}

impl<T: Bindable> Bindable for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::kind()))
    }

    fn from_value(value: &Value, field: &str, depth: u32) -> Result<Self> {
        if T::kind().is_record() {
            if depth >= MAX_DEPTH {
                return Err(nesting_error(field));
            }
            let Value::ArraySection(sections) = value else {
                return Err(GcfgError::type_mismatch(field, "array section", value.kind_name()));
            };
            return sections
                .iter()
                .map(|section| T::from_section(section, field, depth + 1))
                .collect();
        }

        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| T::from_value(item, field, depth))
                .collect(),
            other => Err(GcfgError::type_mismatch(field, "array", other.kind_name())),
        }
    }
}
