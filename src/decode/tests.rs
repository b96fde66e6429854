// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::io::Write;

use tempfile::NamedTempFile;

use crate::Value;

#[derive(Debug, Default, PartialEq)]
struct Service {
    name: String,
    port: u16,
    tags: Vec<String>,
}

crate::record!(Service { name => "name", port => "port", tags => "tags" });

const SERVICE: &str = r#"
# service definition
name = "api"
port = 8080
tags = ["edge", "public"]
"#;

fn expected() -> Service {
    Service {
        name: "api".into(),
        port: 8080,
        tags: vec!["edge".into(), "public".into()],
    }
}

#[test]
fn test_from_slice_and_from_str_agree() {
    let a: Service = from_slice(SERVICE.as_bytes()).unwrap();
    let b: Service = from_str(SERVICE).unwrap();
    assert_eq!(a, expected());
    assert_eq!(a, b);
}

#[test]
fn test_parse_only() {
    let doc = parse(SERVICE.as_bytes()).unwrap();
    assert_eq!(doc.items["port"], Value::Integer("8080".into()));
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["name", "port", "tags"]);
}

#[test]
fn test_unmarshal_overwrites_on_success() {
    let mut svc = Service {
        name: "old".into(),
        port: 1,
        tags: vec![],
    };
    unmarshal(SERVICE.as_bytes(), &mut svc).unwrap();
    assert_eq!(svc, expected());
}

#[test]
fn test_unmarshal_leaves_target_untouched_on_error() {
    let mut svc = expected();
    // name and port are fine, tags is not
    let err = unmarshal(br#"name = "new" port = 9 tags = "x""#, &mut svc).unwrap_err();
    assert!(matches!(err, GcfgError::TypeMismatch { .. }));
    assert_eq!(svc, expected());
}

#[test]
fn test_unmarshal_into_allocates() {
    let mut holder: Option<Service> = None;
    unmarshal_into(SERVICE.as_bytes(), &mut holder).unwrap();
    assert_eq!(holder, Some(expected()));
}

#[test]
fn test_unmarshal_into_stays_empty_on_error() {
    let mut holder: Option<Service> = None;
    assert!(unmarshal_into(b"port = 70000", &mut holder).is_err());
    assert_eq!(holder, None);
}

#[test]
fn test_errors_from_every_stage_surface_unchanged() {
    let lexical = from_str::<Service>("name = \"open").unwrap_err();
    assert!(matches!(lexical, GcfgError::UnterminatedString { .. }));

    let syntax = from_str::<Service>("Sec { name }").unwrap_err();
    assert!(matches!(syntax, GcfgError::SyntaxError { .. }));

    let binding = from_str::<Service>(r#"name = "a" port = 65536 tags = []"#).unwrap_err();
    assert!(matches!(binding, GcfgError::OutOfRange { .. }));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SERVICE.as_bytes()).expect("Failed to write temp file");

    let svc: Service = from_file(file.path()).unwrap();
    assert_eq!(svc, expected());
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = from_file::<Service, _>(dir.path().join("missing.gcfg")).unwrap_err();
    assert!(matches!(err, GcfgError::FileError { code: Some(301), .. }));
    assert!(err.to_string().starts_with("[GCFG] File Error"));
}

#[test]
fn test_error_display_carries_hint_and_code() {
    let err = from_str::<Service>("port = 1.").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("[GCFG] Malformed number '1.'"), "{}", text);
    assert!(text.contains("Hint:"));
    assert!(text.ends_with("Code: 102"));
    assert_eq!(err.hint(), Some("Write a digit after the dot, e.g. 1.0"));
    assert_eq!(err.code(), Some(102));
}
