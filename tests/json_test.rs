#![cfg(feature = "json")]

//! Tests for JSON import and export of the flat map.

use propfile::{Properties, PropertiesError};

#[test]
fn test_to_json_flat_object() {
    let mut props = Properties::new();
    props.parse("b = two\na = one\n");

    // Keys are sorted for deterministic output
    assert_eq!(props.to_json(), r#"{"a":"one","b":"two"}"#);
}

#[test]
fn test_to_json_empty() {
    let props = Properties::new();
    assert_eq!(props.to_json(), "{}");
}

#[test]
fn test_from_json_strings() {
    let props = Properties::from_json(r#"{"host": "example.com", "name": "demo"}"#).unwrap();
    assert_eq!(props.get("host"), Some("example.com"));
    assert_eq!(props.get("name"), Some("demo"));
    assert_eq!(props.len(), 2);
}

#[test]
fn test_from_json_stringifies_numbers_and_bools() {
    let props = Properties::from_json(r#"{"port": 8080, "ratio": 0.5, "debug": true}"#).unwrap();
    assert_eq!(props.get("port"), Some("8080"));
    assert_eq!(props.get("ratio"), Some("0.5"));
    assert_eq!(props.get("debug"), Some("true"));
    assert_eq!(props.get_int("port").unwrap(), 8080);
    assert!(props.get_bool("debug").unwrap());
}

#[test]
fn test_from_json_rejects_nested_values() {
    let result = Properties::from_json(r#"{"nested": {"a": 1}}"#);
    assert!(matches!(result, Err(PropertiesError::Json { .. })));

    let result = Properties::from_json(r#"{"list": [1, 2]}"#);
    assert!(matches!(result, Err(PropertiesError::Json { .. })));
}

#[test]
fn test_from_json_rejects_non_object() {
    assert!(Properties::from_json("[1, 2]").is_err());
    assert!(Properties::from_json("\"text\"").is_err());
    assert!(Properties::from_json("not json at all").is_err());
}

#[test]
fn test_from_json_entries_render() {
    let props = Properties::from_json(r#"{"a": "1", "b": "2"}"#).unwrap();
    // Imported pairs go through the normal set path, so the document renders
    // them as canonical lines
    assert_eq!(props.serialize(), "a = 1\nb = 2\n");
}

#[test]
fn test_json_round_trip() {
    let mut props = Properties::new();
    props.parse("host = example.com\nport = 8080\n");

    let reimported = Properties::from_json(&props.to_json()).unwrap();
    assert_eq!(reimported.len(), props.len());
    assert_eq!(reimported.get("host"), Some("example.com"));
    assert_eq!(reimported.get("port"), Some("8080"));
}
