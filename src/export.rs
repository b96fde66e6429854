// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{Document, Section, Value};
use crate::error::Result;

/// Render a parsed document as JSON, for inspection and debugging.
///
/// - Integers become JSON numbers when they fit in `u64`, otherwise strings
/// - Pairs become two-element arrays
/// - Sections become objects, array sections arrays of objects
/// - Key order follows the source
pub fn document_to_json(doc: &Document) -> serde_json::Value {
    section_to_json(&doc.items)
}

/// Pretty-printed form of [`document_to_json`].
///
/// # Examples
/// ```
/// let doc = gcfg::parse(b"answer = 42").unwrap();
/// let json = gcfg::export::document_to_json_string(&doc);
/// assert!(json.contains("\"answer\": 42"));
/// ```
pub fn document_to_json_string(doc: &Document) -> String {
    format!("{:#}", document_to_json(doc))
}

/// Parse `input` and export it in one call.
pub fn export_bytes(input: &[u8]) -> Result<String> {
    let doc = crate::parse(input)?;
    Ok(document_to_json_string(&doc))
}

fn section_to_json(section: &Section) -> serde_json::Value {
    section
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Integer(text) => match text.parse::<u64>() {
            Ok(n) => json!(n),
            Err(_) => json!(text),
        },
        Value::Float(n) => json!(n),
        Value::Str(s) => json!(s),
        Value::Bool(b) => json!(b),
        Value::Null => serde_json::Value::Null,
        Value::Pair(first, second) => json!([value_to_json(first), value_to_json(second)]),
        Value::Array(items) => json!(items.iter().map(value_to_json).collect::<Vec<_>>()),
        Value::Section(section) => section_to_json(section),
        Value::ArraySection(sections) => {
            json!(sections.iter().map(section_to_json).collect::<Vec<_>>())
        }
    }
}
