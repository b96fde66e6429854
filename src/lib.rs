pub mod access;
pub mod ast;
pub mod binder;
pub mod decode;
pub mod error;
pub mod export;
pub mod lexer;
pub mod pair;
pub mod parser;

pub use access::Entry;
pub use ast::{Document, Section, Value};
pub use binder::{Bindable, FieldKind, Record, Schema};
pub use decode::{from_file, from_slice, from_str, parse, unmarshal, unmarshal_into};
pub use error::{GcfgError, Result};
pub use pair::Pair;
