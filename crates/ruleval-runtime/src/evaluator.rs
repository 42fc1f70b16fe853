//! Expression evaluator
//!
//! Walks an [`Expression`] tree against an [`EvaluationContext`]. Values read
//! from the context or from literals are borrowed for as long as possible, so
//! a rule that only inspects `data` never copies it.

use crate::context::EvaluationContext;
use crate::error::{Result, RuntimeError};
use crate::functions::BuiltinFunction;
use crate::limits::EvalLimits;
use crate::operators::{
    execute_binary_op, execute_compare, execute_unary_op, get_attribute, subscript,
};
use ruleval_core::ast::{Expression, Operator};
use ruleval_core::Value;
use std::borrow::Cow;

/// Tree-walking evaluator for a single context
pub struct Evaluator<'a> {
    context: &'a EvaluationContext,
    limits: &'a EvalLimits,
}

impl<'a> Evaluator<'a> {
    pub fn new(context: &'a EvaluationContext, limits: &'a EvalLimits) -> Self {
        Self { context, limits }
    }

    /// Evaluate an expression to a value
    pub fn evaluate(&self, expr: &Expression) -> Result<Value> {
        let value = self.eval(expr)?.into_owned();
        tracing::trace!("Evaluated expression to {}", value.type_name());
        Ok(value)
    }

    fn eval<'e>(&self, expr: &'e Expression) -> Result<Cow<'e, Value>>
    where
        'a: 'e,
    {
        match expr {
            Expression::Literal(value) => Ok(Cow::Borrowed(value)),

            Expression::Name(name) => self.context.lookup(name).map(Cow::Borrowed),

            Expression::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval(item).map(Cow::into_owned))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Cow::Owned(Value::Array(values)))
            }

            Expression::Attribute { target, name } => match self.eval(target)? {
                Cow::Borrowed(value) => get_attribute(value, name).map(Cow::Borrowed),
                Cow::Owned(value) => get_attribute(&value, name).map(|v| Cow::Owned(v.clone())),
            },

            Expression::Index { target, index } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                match target {
                    Cow::Borrowed(value) => subscript(value, &index),
                    Cow::Owned(value) => {
                        subscript(&value, &index).map(|v| Cow::Owned(v.into_owned()))
                    }
                }
            }

            Expression::Binary { left, op, right } => self.eval_binary(left, *op, right),

            Expression::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                execute_unary_op(&operand, *op).map(Cow::Owned)
            }

            Expression::Comparison { left, comparisons } => {
                let mut current = self.eval(left)?;
                for (op, next) in comparisons {
                    let next = self.eval(next)?;
                    if !execute_compare(&current, *op, &next)? {
                        return Ok(Cow::Owned(Value::Bool(false)));
                    }
                    current = next;
                }
                Ok(Cow::Owned(Value::Bool(true)))
            }

            Expression::FunctionCall { name, args } => {
                let function = BuiltinFunction::lookup(name)
                    .ok_or_else(|| RuntimeError::FunctionNotDefined(name.clone()))?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg).map(Cow::into_owned))
                    .collect::<Result<Vec<_>>>()?;
                function.call(&args).map(Cow::Owned)
            }

            Expression::Ternary {
                condition,
                true_expr,
                false_expr,
            } => {
                if self.eval(condition)?.is_truthy() {
                    self.eval(true_expr)
                } else {
                    self.eval(false_expr)
                }
            }
        }
    }

    fn eval_binary<'e>(
        &self,
        left: &'e Expression,
        op: Operator,
        right: &'e Expression,
    ) -> Result<Cow<'e, Value>>
    where
        'a: 'e,
    {
        let left = self.eval(left)?;

        // and/or yield one of their operands, not a coerced bool
        match op {
            Operator::And if !left.is_truthy() => return Ok(left),
            Operator::Or if left.is_truthy() => return Ok(left),
            Operator::And | Operator::Or => return self.eval(right),
            _ => {}
        }

        let right = self.eval(right)?;
        if op.is_comparison() {
            return execute_compare(&left, op, &right).map(|b| Cow::Owned(Value::Bool(b)));
        }
        execute_binary_op(&left, op, &right, self.limits).map(Cow::Owned)
    }
}
