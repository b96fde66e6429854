use indexmap::IndexMap;

/// A brace-delimited block of assignments.
pub type Section = IndexMap<String, Value>;

/// Any right-hand side the grammar can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Decimal digits, kept as text until the binder knows the target width.
    Integer(String),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
    Pair(Box<Value>, Box<Value>),
    Array(Vec<Value>),
    Section(Section),
    /// Repeated `[name] { ... }` blocks, in source order.
    ArraySection(Vec<Section>),
}

impl Value {
    /// Human readable shape name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Pair(_, _) => "pair",
            Value::Array(_) => "array",
            Value::Section(_) => "section",
            Value::ArraySection(_) => "array section",
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        if let Value::Section(items) = self {
            Some(items)
        } else {
            None
        }
    }
}

/// One parsed configuration file: top-level names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub items: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Insert a top-level assignment or section. Last write wins.
    pub fn insert(&mut self, name: String, value: Value) {
        self.items.insert(name, value);
    }

    /// Append a `[name] { ... }` block to the sequence stored under `name`.
    ///
    /// Any non-sequence entry already stored under that name is replaced by a
    /// fresh single-element sequence.
    pub fn append_section(&mut self, name: String, section: Section) {
        match self.items.get_mut(&name) {
            Some(Value::ArraySection(sections)) => sections.push(section),
            _ => {
                self.items.insert(name, Value::ArraySection(vec![section]));
            }
        }
    }
}
