//! Comparison operator execution

use crate::error::{Result, RuntimeError};
use ruleval_core::ast::Operator;
use ruleval_core::Value;
use std::cmp::Ordering;

/// Execute a comparison operation
///
/// Equality is structural and never fails; values of different types are
/// simply unequal. Ordering needs two numbers or two strings.
pub(crate) fn execute_compare(left: &Value, op: Operator, right: &Value) -> Result<bool> {
    match op {
        Operator::Eq => Ok(left == right),
        Operator::Ne => Ok(left != right),
        Operator::Is => Ok(is_identical(left, right)),
        Operator::IsNot => Ok(!is_identical(left, right)),
        Operator::In => contains(right, left),
        Operator::NotIn => contains(right, left).map(|found| !found),
        Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge => {
            let Some(ordering) = order(left, op, right)? else {
                // NaN is unordered: every ordering comparison is false
                return Ok(false);
            };
            Ok(match op {
                Operator::Lt => ordering == Ordering::Less,
                Operator::Le => ordering != Ordering::Greater,
                Operator::Gt => ordering == Ordering::Greater,
                _ => ordering != Ordering::Less,
            })
        }
        _ => Err(RuntimeError::TypeError(format!(
            "'{}' is not a comparison operator",
            op
        ))),
    }
}

fn order(left: &Value, op: Operator, right: &Value) -> Result<Option<Ordering>> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(l.partial_cmp(r)),
        (Value::String(l), Value::String(r)) => Ok(Some(l.cmp(r))),
        _ => Err(RuntimeError::TypeError(format!(
            "'{}' not supported between {} and {}",
            op,
            left.type_name(),
            right.type_name()
        ))),
    }
}

/// `is` only identifies the singletons None, True and False
fn is_identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        _ => false,
    }
}

/// Membership of `item` in `container`
fn contains(container: &Value, item: &Value) -> Result<bool> {
    match (container, item) {
        (Value::Array(items), item) => Ok(items.iter().any(|v| v == item)),
        (Value::String(haystack), Value::String(needle)) => Ok(haystack.contains(needle.as_str())),
        (Value::String(_), other) => Err(RuntimeError::TypeError(format!(
            "'in <string>' requires string as left operand, not {}",
            other.type_name()
        ))),
        (Value::Object(map), Value::String(key)) => Ok(map.contains_key(key)),
        (Value::Object(_), _) => Ok(false),
        (other, _) => Err(RuntimeError::TypeError(format!(
            "argument of type {} is not iterable",
            other.type_name()
        ))),
    }
}
