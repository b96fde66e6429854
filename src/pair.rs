use std::fmt;

use crate::ast::{Section, Value};
use crate::binder::{self, Bindable, FieldKind, Record, Schema};
use crate::error::{GcfgError, Result};

/// Two values written as `(first, second)` in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn values(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A, B> Record for Pair<A, B>
where
    A: Bindable + Default + 'static,
    B: Bindable + Default + 'static,
{
    fn schema() -> Schema<Self> {
        Schema::new("Pair")
            .field("first", "first", |p: &mut Self| &mut p.first)
            .field("second", "second", |p: &mut Self| &mut p.second)
    }
}

impl<A, B> Bindable for Pair<A, B>
where
    A: Bindable + Default + 'static,
    B: Bindable + Default + 'static,
{
    fn kind() -> FieldKind {
        FieldKind::Pair(Box::new(A::kind()), Box::new(B::kind()))
    }

    /// The two components are laid out as a `first`/`second` section and bound
    /// like any other record, one level further down.
    fn from_value(value: &Value, field: &str, depth: u32) -> Result<Self> {
        let Value::Pair(first, second) = value else {
            return Err(GcfgError::type_mismatch(field, Self::kind().to_string(), value.kind_name()));
        };

        let mut section = Section::new();
        section.insert("first".to_string(), (**first).clone());
        section.insert("second".to_string(), (**second).clone());
        binder::bind_section(&section, depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let pair = Pair::new("hello", 3);
        assert_eq!(pair.to_string(), "(hello, 3)");
    }

    #[test]
    fn test_values() {
        let (s, n) = Pair::new("hello".to_string(), 3).values();
        assert_eq!(s, "hello");
        assert_eq!(n, 3);
    }

    #[test]
    fn test_from_tuple() {
        let pair: Pair<i32, &str> = (1, "hi").into();
        assert_eq!(pair, Pair::new(1, "hi"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            <Pair<i32, String> as Bindable>::kind(),
            FieldKind::Pair(Box::new(FieldKind::Int { bits: 32 }), Box::new(FieldKind::Str))
        );
    }
}
