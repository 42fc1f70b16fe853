//! Key, index and attribute access

use crate::error::{Result, RuntimeError};
use ruleval_core::Value;
use std::borrow::Cow;

/// Subscript `target[index]`
///
/// Objects are indexed by string keys, arrays and strings by integers;
/// negative integers count from the end.
pub(crate) fn subscript<'v>(target: &'v Value, index: &Value) -> Result<Cow<'v, Value>> {
    match (target, index) {
        (Value::Object(map), Value::String(key)) => map
            .get(key)
            .map(Cow::Borrowed)
            .ok_or_else(|| RuntimeError::KeyNotFound(key.clone())),
        (Value::Object(_), other) => Err(RuntimeError::KeyNotFound(other.to_string())),
        (Value::Array(items), index) => {
            let position = resolve_index(integer_index(target, index)?, items.len())?;
            Ok(Cow::Borrowed(&items[position]))
        }
        (Value::String(s), index) => {
            let index = integer_index(target, index)?;
            let length = s.chars().count();
            let position = resolve_index(index, length)?;
            let ch = s.chars().nth(position).ok_or(RuntimeError::IndexOutOfRange { index, length })?;
            Ok(Cow::Owned(Value::String(ch.to_string())))
        }
        (other, _) => Err(RuntimeError::TypeError(format!(
            "{} value is not subscriptable",
            other.type_name()
        ))),
    }
}

/// Attribute `target.name`, which reads key `name` of an object
pub(crate) fn get_attribute<'v>(target: &'v Value, name: &str) -> Result<&'v Value> {
    if name.starts_with('_') {
        return Err(RuntimeError::ForbiddenAttribute(name.to_string()));
    }

    match target {
        Value::Object(map) => map
            .get(name)
            .ok_or_else(|| RuntimeError::KeyNotFound(name.to_string())),
        other => Err(RuntimeError::TypeError(format!(
            "{} value has no attribute '{}'",
            other.type_name(),
            name
        ))),
    }
}

fn integer_index(target: &Value, index: &Value) -> Result<i64> {
    index.as_integer().map_err(|_| {
        RuntimeError::TypeError(format!(
            "{} indices must be integers, not {}",
            target.type_name(),
            index.type_name()
        ))
    })
}

fn resolve_index(index: i64, length: usize) -> Result<usize> {
    let len = length as i64;
    let position = if index < 0 { index + len } else { index };
    if position < 0 || position >= len {
        return Err(RuntimeError::IndexOutOfRange { index, length });
    }
    Ok(position as usize)
}
