// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Document, Section, Value};
use crate::binder::Bindable;
use crate::error::{GcfgError, Result};

/// `name` or `name[index]`.
static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\[(\d+)\])?$").expect("segment pattern is valid"));

/// What a path points at: a plain value, or one block of an array section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Value(&'a Value),
    Section(&'a Section),
}

fn parse_segment(path: &str, segment: &str) -> Result<(String, Option<usize>)> {
    let caps = SEGMENT.captures(segment).ok_or_else(|| GcfgError::InvalidPath {
        path: path.to_string(),
        hint: Some(format!("'{}' is not a name or name[index]", segment)),
        code: Some(501),
    })?;
    let name = caps[1].to_string();
    let index = match caps.get(2) {
        Some(m) => Some(m.as_str().parse::<usize>().map_err(|_| GcfgError::InvalidPath {
            path: path.to_string(),
            hint: Some("Index is too large".into()),
            code: Some(501),
        })?),
        None => None,
    };
    Ok((name, index))
}

fn index_into<'a>(entry: Entry<'a>, index: usize) -> Option<Entry<'a>> {
    match entry {
        Entry::Value(Value::ArraySection(sections)) => sections.get(index).map(Entry::Section),
        Entry::Value(Value::Array(items)) => items.get(index).map(Entry::Value),
        _ => None,
    }
}

fn lookup<'a>(section: &'a Section, name: &str) -> Option<Entry<'a>> {
    section.get(name).map(Entry::Value)
}

impl Document {
    /// Resolve a dotted path such as `Point.x` or `SecArr[1].foo`.
    ///
    /// Returns `Ok(None)` when the path is well formed but nothing is stored
    /// there.
    pub fn get(&self, path: &str) -> Result<Option<Entry<'_>>> {
        let mut current: Option<Entry<'_>> = None;

        for (i, segment) in path.split('.').enumerate() {
            let (name, index) = parse_segment(path, segment)?;

            let next = if i == 0 {
                lookup(&self.items, &name)
            } else {
                match current {
                    Some(Entry::Value(Value::Section(section))) | Some(Entry::Section(section)) => {
                        lookup(section, &name)
                    }
                    _ => None,
                }
            };

            current = match (next, index) {
                (Some(entry), Some(idx)) => index_into(entry, idx),
                (entry, None) => entry,
                (None, Some(_)) => None,
            };

            if current.is_none() {
                return Ok(None);
            }
        }

        Ok(current)
    }

    /// Resolve `path` and convert what is found there.
    ///
    /// # Examples
    /// ```
    /// let doc = gcfg::parse(b"server { port = 8080 }").unwrap();
    /// let port: u16 = doc.get_as("server.port").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn get_as<T: Bindable>(&self, path: &str) -> Result<T> {
        match self.get(path)? {
            Some(Entry::Value(value)) => T::from_value(value, path, 0),
            Some(Entry::Section(section)) => T::from_section(section, path, 1),
            None => Err(GcfgError::NotFound {
                path: path.to_string(),
                hint: None,
                code: Some(502),
            }),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        matches!(self.get(path), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const INPUT: &str = r#"
title = "demo"
Point { x = 3 s = [1, 2, 3] }
[SecArr] { foo = 3 }
[SecArr] { foo = 4 }
"#;

    #[test]
    fn test_get_paths() {
        let doc = parse(INPUT.as_bytes()).unwrap();

        assert_eq!(
            doc.get("title").unwrap(),
            Some(Entry::Value(&Value::Str("demo".into())))
        );
        assert_eq!(
            doc.get("Point.x").unwrap(),
            Some(Entry::Value(&Value::Integer("3".into())))
        );
        assert_eq!(
            doc.get("Point.s[2]").unwrap(),
            Some(Entry::Value(&Value::Integer("3".into())))
        );
        assert_eq!(
            doc.get("SecArr[1].foo").unwrap(),
            Some(Entry::Value(&Value::Integer("4".into())))
        );
        assert!(matches!(doc.get("SecArr[0]").unwrap(), Some(Entry::Section(_))));
    }

    #[test]
    fn test_missing_paths() {
        let doc = parse(INPUT.as_bytes()).unwrap();
        assert_eq!(doc.get("nope").unwrap(), None);
        assert_eq!(doc.get("Point.nope").unwrap(), None);
        assert_eq!(doc.get("SecArr[5].foo").unwrap(), None);
        assert_eq!(doc.get("title.x").unwrap(), None);
        assert!(!doc.has("Point.y"));
        assert!(doc.has("Point.x"));
    }

    #[test]
    fn test_invalid_paths() {
        let doc = parse(INPUT.as_bytes()).unwrap();
        for path in ["", "Point..x", "1abc", "Point.x[", "a-b"] {
            assert!(
                matches!(doc.get(path), Err(GcfgError::InvalidPath { .. })),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_get_as() {
        let doc = parse(INPUT.as_bytes()).unwrap();
        let x: u8 = doc.get_as("Point.x").unwrap();
        assert_eq!(x, 3);
        let s: Vec<u32> = doc.get_as("Point.s").unwrap();
        assert_eq!(s, vec![1, 2, 3]);
        let title: String = doc.get_as("title").unwrap();
        assert_eq!(title, "demo");

        assert!(matches!(
            doc.get_as::<i32>("missing"),
            Err(GcfgError::NotFound { code: Some(502), .. })
        ));
        assert!(matches!(
            doc.get_as::<bool>("title"),
            Err(GcfgError::TypeMismatch { .. })
        ));
    }
}
