use std::fmt;

/// Declared shape of a record field, as seen by the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Int { bits: u32 },
    Uint { bits: u32 },
    Float { bits: u32 },
    Str,
    Bool,
    Sequence(Box<FieldKind>),
    Record(&'static str),
    Pair(Box<FieldKind>, Box<FieldKind>),
}

impl FieldKind {
    /// Whether the binder knows how to fill a field of this kind.
    ///
    /// Floats are only accepted as sequence elements, and sequences may only
    /// hold scalars or records.
    pub fn is_bindable(&self) -> bool {
        match self {
            FieldKind::Int { .. }
            | FieldKind::Uint { .. }
            | FieldKind::Str
            | FieldKind::Bool
            | FieldKind::Record(_) => true,
            FieldKind::Float { .. } => false,
            FieldKind::Sequence(inner) => matches!(
                **inner,
                FieldKind::Int { .. }
                    | FieldKind::Uint { .. }
                    | FieldKind::Float { .. }
                    | FieldKind::Str
                    | FieldKind::Bool
                    | FieldKind::Record(_)
            ),
            FieldKind::Pair(first, second) => first.is_bindable() && second.is_bindable(),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, FieldKind::Record(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int { bits } => write!(f, "i{}", bits),
            FieldKind::Uint { bits } => write!(f, "u{}", bits),
            FieldKind::Float { bits } => write!(f, "f{}", bits),
            FieldKind::Str => f.write_str("string"),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Sequence(inner) => write!(f, "[{}]", inner),
            FieldKind::Record(name) => write!(f, "record {}", name),
            FieldKind::Pair(first, second) => write!(f, "({}, {})", first, second),
        }
    }
}
