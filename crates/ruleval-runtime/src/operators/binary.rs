//! Arithmetic operator execution

use crate::error::{Result, RuntimeError};
use crate::limits::EvalLimits;
use ruleval_core::ast::Operator;
use ruleval_core::Value;

/// Execute an arithmetic operation
pub(crate) fn execute_binary_op(
    left: &Value,
    op: Operator,
    right: &Value,
    limits: &EvalLimits,
) -> Result<Value> {
    match (left, op, right) {
        (Value::Number(l), _, Value::Number(r)) => numeric(*l, op, *r, limits),

        (Value::String(l), Operator::Add, Value::String(r)) => {
            check_length("string", l.chars().count() + r.chars().count(), limits)?;
            Ok(Value::String(format!("{}{}", l, r)))
        }
        (Value::Array(l), Operator::Add, Value::Array(r)) => {
            check_length("list", l.len() + r.len(), limits)?;
            Ok(Value::Array(l.iter().chain(r.iter()).cloned().collect()))
        }
        (Value::String(s), Operator::Mul, count @ Value::Number(_))
        | (count @ Value::Number(_), Operator::Mul, Value::String(s)) => {
            repeat(s, count, limits)
        }

        _ => Err(RuntimeError::TypeError(format!(
            "unsupported operand types for {}: {} and {}",
            op,
            left.type_name(),
            right.type_name()
        ))),
    }
}

fn numeric(l: f64, op: Operator, r: f64, limits: &EvalLimits) -> Result<Value> {
    let result = match op {
        Operator::Add => l + r,
        Operator::Sub => l - r,
        Operator::Mul => l * r,
        Operator::Div => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            l / r
        }
        Operator::FloorDiv => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            (l / r).floor()
        }
        Operator::Mod => {
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            // Result takes the sign of the divisor: -7 % 3 == 2
            let m = l % r;
            if m != 0.0 && (m < 0.0) != (r < 0.0) {
                m + r
            } else {
                m
            }
        }
        Operator::Pow => power(l, r, limits)?,
        _ => {
            return Err(RuntimeError::TypeError(format!(
                "'{}' is not an arithmetic operator",
                op
            )))
        }
    };

    if !result.is_finite() && l.is_finite() && r.is_finite() {
        return Err(RuntimeError::Overflow(op.to_string()));
    }
    Ok(Value::Number(result))
}

fn power(base: f64, exponent: f64, limits: &EvalLimits) -> Result<f64> {
    if exponent.abs() > limits.max_power {
        return Err(RuntimeError::LimitExceeded(format!(
            "exponent {} exceeds the maximum of {}",
            Value::Number(exponent),
            Value::Number(limits.max_power)
        )));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(RuntimeError::InvalidValue(
            "negative number cannot be raised to a fractional power".to_string(),
        ));
    }
    Ok(base.powf(exponent))
}

fn repeat(s: &str, count: &Value, limits: &EvalLimits) -> Result<Value> {
    let count = count.as_integer()?;
    if count <= 0 {
        return Ok(Value::String(String::new()));
    }

    let length = usize::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(s.chars().count()))
        .ok_or_else(|| RuntimeError::LimitExceeded("string repetition is too large".to_string()))?;
    check_length("string", length, limits)?;

    Ok(Value::String(s.repeat(count as usize)))
}

fn check_length(kind: &str, length: usize, limits: &EvalLimits) -> Result<()> {
    if length > limits.max_string_length {
        return Err(RuntimeError::LimitExceeded(format!(
            "{} of length {} exceeds the maximum of {}",
            kind, length, limits.max_string_length
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn eval(left: Value, op: Operator, right: Value) -> Result<Value> {
        execute_binary_op(&left, op, &right, &EvalLimits::default())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval(num(1.0), Operator::Add, num(1.0)), Ok(num(2.0)));
        assert_eq!(eval(num(5.0), Operator::Sub, num(7.0)), Ok(num(-2.0)));
        assert_eq!(eval(num(3.0), Operator::Mul, num(4.0)), Ok(num(12.0)));
        assert_eq!(eval(num(7.0), Operator::Div, num(2.0)), Ok(num(3.5)));
        assert_eq!(eval(num(7.0), Operator::FloorDiv, num(2.0)), Ok(num(3.0)));
        assert_eq!(eval(num(-7.0), Operator::FloorDiv, num(2.0)), Ok(num(-4.0)));
        assert_eq!(eval(num(2.0), Operator::Pow, num(10.0)), Ok(num(1024.0)));
    }

    #[test]
    fn test_modulo_follows_divisor_sign() {
        assert_eq!(eval(num(7.0), Operator::Mod, num(3.0)), Ok(num(1.0)));
        assert_eq!(eval(num(-7.0), Operator::Mod, num(3.0)), Ok(num(2.0)));
        assert_eq!(eval(num(7.0), Operator::Mod, num(-3.0)), Ok(num(-2.0)));
        assert_eq!(eval(num(6.0), Operator::Mod, num(3.0)), Ok(num(0.0)));
    }

    #[test]
    fn test_division_by_zero() {
        for op in [Operator::Div, Operator::FloorDiv, Operator::Mod] {
            assert_eq!(eval(num(1.0), op, num(0.0)), Err(RuntimeError::DivisionByZero));
        }
        assert_eq!(
            eval(num(0.0), Operator::Pow, num(-1.0)),
            Err(RuntimeError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            eval(num(1e308), Operator::Mul, num(10.0)),
            Err(RuntimeError::Overflow("*".to_string()))
        );
    }

    #[test]
    fn test_power_limit() {
        assert!(matches!(
            eval(num(2.0), Operator::Pow, num(5_000_000.0)),
            Err(RuntimeError::LimitExceeded(_))
        ));
        assert!(matches!(
            eval(num(-8.0), Operator::Pow, num(0.5)),
            Err(RuntimeError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_string_concatenation_and_repeat() {
        assert_eq!(
            eval(Value::from("ab"), Operator::Add, Value::from("cd")),
            Ok(Value::from("abcd"))
        );
        assert_eq!(
            eval(Value::from("ab"), Operator::Mul, num(3.0)),
            Ok(Value::from("ababab"))
        );
        assert_eq!(
            eval(num(2.0), Operator::Mul, Value::from("x")),
            Ok(Value::from("xx"))
        );
        assert_eq!(eval(Value::from("x"), Operator::Mul, num(-1.0)), Ok(Value::from("")));
    }

    #[test]
    fn test_string_limits() {
        let limits = EvalLimits {
            max_string_length: 4,
            max_power: 10.0,
        };
        assert!(matches!(
            execute_binary_op(&Value::from("abc"), Operator::Add, &Value::from("de"), &limits),
            Err(RuntimeError::LimitExceeded(_))
        ));
        assert!(matches!(
            execute_binary_op(&Value::from("ab"), Operator::Mul, &num(3.0), &limits),
            Err(RuntimeError::LimitExceeded(_))
        ));
        assert!(matches!(
            execute_binary_op(&Value::from("ab"), Operator::Mul, &num(1e15), &limits),
            Err(RuntimeError::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_array_concatenation() {
        assert_eq!(
            eval(
                Value::Array(vec![num(1.0)]),
                Operator::Add,
                Value::Array(vec![num(2.0)])
            ),
            Ok(Value::Array(vec![num(1.0), num(2.0)]))
        );
    }

    #[test]
    fn test_array_concatenation_limit() {
        let limits = EvalLimits {
            max_string_length: 4,
            max_power: 10.0,
        };
        let pair = Value::Array(vec![num(0.0); 2]);
        let triple = Value::Array(vec![num(0.0); 3]);

        assert_eq!(
            execute_binary_op(&pair, Operator::Add, &pair, &limits),
            Ok(Value::Array(vec![num(0.0); 4]))
        );
        assert_eq!(
            execute_binary_op(&pair, Operator::Add, &triple, &limits),
            Err(RuntimeError::LimitExceeded(
                "list of length 5 exceeds the maximum of 4".to_string()
            ))
        );
    }

    #[test]
    fn test_unsupported_operands() {
        assert_eq!(
            eval(Value::from("1"), Operator::Add, num(1.0)),
            Err(RuntimeError::TypeError(
                "unsupported operand types for +: string and number".to_string()
            ))
        );
        assert!(eval(Value::Bool(true), Operator::Add, num(1.0)).is_err());
        assert!(eval(Value::Null, Operator::Sub, num(1.0)).is_err());
        assert!(eval(Value::from("ab"), Operator::Mul, num(1.5)).is_err());
    }
}
