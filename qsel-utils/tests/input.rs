use qsel_utils::{load_json, read_input};
use serde_json::{json, Value};
use std::io::Write;

#[test]
fn test_read_input_inline() {
    assert_eq!(read_input(r#"{"capacity": 1}"#).unwrap(), r#"{"capacity": 1}"#);
}

#[test]
fn test_read_input_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"capacity": 13}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let value: Value = load_json(&path).unwrap();
    assert_eq!(value, json!({"capacity": 13}));
}

#[test]
fn test_read_input_missing_file() {
    assert!(read_input("/definitely/not/here.json").is_err());
}

#[test]
fn test_load_json_parse_error() {
    let err = load_json::<Value>("[1, 2").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse json"));
}
