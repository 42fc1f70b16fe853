//! Built-in functions
//!
//! The only callables a rule can reach. None of them is random, so the same
//! rule on the same data always gives the same answer.

use crate::error::{Result, RuntimeError};
use ruleval_core::Value;

/// Whitelisted function callable from a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFunction {
    /// `int(x)`: truncate a number, parse an integer string, booleans to 0/1
    Int,
    /// `float(x)`: numbers, numeric strings, booleans to 0/1
    Float,
    /// `str(x)`: render any value
    Str,
    /// `len(x)`: length of a string, array or object
    Len,
    /// `abs(x)`: absolute value of a number
    Abs,
}

impl BuiltinFunction {
    /// Resolve a function name
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "str" => Some(Self::Str),
            "len" => Some(Self::Len),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Len => "len",
            Self::Abs => "abs",
        }
    }

    /// Call the function with already evaluated arguments
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        let [arg] = args else {
            return Err(RuntimeError::ArgumentCount {
                name: self.name(),
                expected: 1,
                actual: args.len(),
            });
        };

        match self {
            Self::Int => to_int(arg),
            Self::Float => to_float(arg),
            Self::Str => Ok(Value::String(arg.to_string())),
            Self::Len => length(arg),
            Self::Abs => match arg {
                Value::Number(n) => Ok(Value::Number(n.abs())),
                other => Err(self.bad_argument(other)),
            },
        }
    }

    fn bad_argument(&self, arg: &Value) -> RuntimeError {
        RuntimeError::TypeError(format!(
            "{}() argument must not be {}",
            self.name(),
            arg.type_name()
        ))
    }
}

fn to_int(arg: &Value) -> Result<Value> {
    match arg {
        Value::Number(n) if n.is_finite() => Ok(Value::Number(n.trunc())),
        Value::Number(n) => Err(RuntimeError::InvalidValue(format!(
            "cannot convert {} to integer",
            Value::Number(*n)
        ))),
        Value::Bool(b) => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|n| Value::Number(n as f64))
            .map_err(|_| RuntimeError::InvalidValue(format!("invalid literal for int(): '{}'", s))),
        other => Err(BuiltinFunction::Int.bad_argument(other)),
    }
}

fn to_float(arg: &Value) -> Result<Value> {
    match arg {
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::Bool(b) => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| {
                RuntimeError::InvalidValue(format!("could not convert string to float: '{}'", s))
            }),
        other => Err(BuiltinFunction::Float.bad_argument(other)),
    }
}

fn length(arg: &Value) -> Result<Value> {
    let len = match arg {
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        other => {
            return Err(RuntimeError::TypeError(format!(
                "{} value has no len()",
                other.type_name()
            )))
        }
    };
    Ok(Value::Number(len as f64))
}
