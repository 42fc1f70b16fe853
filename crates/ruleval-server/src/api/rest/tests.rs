//! Tests for REST API components

#![cfg(test)]

use super::conversions::*;
use super::types::*;
use serde_json::json;

#[test]
fn test_request_data_object() {
    let data = json!({"x": 10, "tags": ["a"], "nested": {"ok": true}});
    let serde_json::Value::Object(map) = data.clone() else {
        panic!("Expected object");
    };
    assert_eq!(request_data(Some(map)), data);
}

#[test]
fn test_request_data_missing() {
    assert_eq!(request_data(None), json!({}));
}

#[test]
fn test_non_empty_rule() {
    assert_eq!(non_empty_rule(Some("True".to_string())), Some("True".to_string()));
    assert_eq!(non_empty_rule(Some(String::new())), None);
    assert_eq!(non_empty_rule(None), None);
    // Whitespace is left for the parser to reject
    assert_eq!(non_empty_rule(Some(" ".to_string())), Some(" ".to_string()));
}

#[test]
fn test_evaluate_request_defaults() {
    let request: EvaluateRequest = serde_json::from_str("{}").unwrap();
    assert!(request.rule.is_none());
    assert!(request.data.is_none());

    let request: EvaluateRequest =
        serde_json::from_str(r#"{"rule": null, "data": null}"#).unwrap();
    assert!(request.rule.is_none());
    assert!(request.data.is_none());
}

#[test]
fn test_evaluate_request_rejects_wrong_shapes() {
    assert!(serde_json::from_str::<EvaluateRequest>(r#"{"rule": 5}"#).is_err());
    assert!(serde_json::from_str::<EvaluateRequest>(r#"{"rule": "True", "data": [1]}"#).is_err());
}

#[test]
fn test_evaluate_response_serialization() {
    let body = serde_json::to_value(EvaluateResponse { result: true }).unwrap();
    assert_eq!(body, json!({"result": true}));
}
