//! Unit tests for runtime values and AST helpers

use ruleval_core::ast::{Expression, Operator, UnaryOperator};
use ruleval_core::{CoreError, Value};
use serde_json::json;

// =============================================================================
// Value Tests
// =============================================================================

#[test]
fn test_value_from_request_data() {
    let value = Value::try_from(json!({
        "x": 10,
        "tags": ["a"],
        "nested": {"ok": true},
        "none": null
    }))
    .unwrap();
    let Value::Object(map) = value else {
        panic!("Expected object");
    };
    assert_eq!(map.get("x"), Some(&Value::Number(10.0)));
    assert_eq!(map.get("tags"), Some(&Value::Array(vec![Value::from("a")])));
    assert_eq!(map.get("none"), Some(&Value::Null));
    assert!(matches!(map.get("nested"), Some(Value::Object(_))));
}

#[test]
fn test_value_deserializes_untagged() -> anyhow::Result<()> {
    let value: Value = serde_json::from_str(r#"{"amount": 2.5, "flag": false}"#)?;
    assert_eq!(value.to_json(), json!({"amount": 2.5, "flag": false}));
    Ok(())
}

#[test]
fn test_truthiness() {
    let falsy = [
        Value::Null,
        Value::Bool(false),
        Value::Number(0.0),
        Value::Number(f64::NAN),
        Value::from(""),
        Value::Array(vec![]),
        Value::try_from(json!({})).unwrap(),
    ];
    for value in &falsy {
        assert!(!value.is_truthy(), "{:?} should be falsy", value);
    }

    let truthy = [
        Value::Bool(true),
        Value::Number(-1.0),
        Value::from("0"),
        Value::try_from(json!([0])).unwrap(),
        Value::try_from(json!({"k": null})).unwrap(),
    ];
    for value in &truthy {
        assert!(value.is_truthy(), "{:?} should be truthy", value);
    }
}

#[test]
fn test_as_bool_is_strict() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Number(1.0).as_bool(), None);
    assert_eq!(Value::from("true").as_bool(), None);
}

#[test]
fn test_as_integer() {
    assert_eq!(Value::Number(-3.0).as_integer(), Ok(-3));
    assert!(matches!(
        Value::Number(1.5).as_integer(),
        Err(CoreError::InvalidValue(_))
    ));
    assert!(matches!(
        Value::Bool(true).as_integer(),
        Err(CoreError::TypeError(_))
    ));
    assert!(Value::Number(1e300).as_integer().is_err());
}

#[test]
fn test_display_matches_rule_syntax() {
    assert_eq!(Value::Null.to_string(), "None");
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::Number(10.0).to_string(), "10");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-inf");
    let value = Value::try_from(json!({"b": 1, "a": [true]})).unwrap();
    assert_eq!(value.to_string(), r#"{"a":[true],"b":1}"#);
}

// =============================================================================
// AST Tests
// =============================================================================

#[test]
fn test_operator_classes() {
    assert!(Operator::Lt.is_ordering());
    assert!(Operator::In.is_comparison());
    assert!(!Operator::In.is_ordering());
    assert!(Operator::FloorDiv.is_arithmetic());
    assert!(Operator::Or.is_logical());
    assert_eq!(Operator::IsNot.to_string(), "is not");
}

#[test]
fn test_expression_depth_bounds_recursion() {
    let mut expr = Expression::name("data");
    for _ in 0..10 {
        expr = Expression::unary(UnaryOperator::Not, expr);
    }
    assert_eq!(expr.depth(), 11);
}

#[test]
fn test_expression_serializes() -> anyhow::Result<()> {
    let expr = Expression::binary(
        Expression::attribute(Expression::name("data"), "x"),
        Operator::Gt,
        Expression::literal(Value::Number(5.0)),
    );
    let text = serde_json::to_string(&expr)?;
    let back: Expression = serde_json::from_str(&text)?;
    assert_eq!(back, expr);
    Ok(())
}
