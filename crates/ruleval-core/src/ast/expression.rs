//! Expression AST nodes

use super::operator::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Expression AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Literal value
    Literal(Value),

    /// List or tuple literal (e.g., `[1, 2]`, `("a", "b")`)
    List(Vec<Expression>),

    /// Bound name (e.g., `data`)
    Name(String),

    /// Attribute access (e.g., `data.user`), reads an object key
    Attribute {
        target: Box<Expression>,
        name: String,
    },

    /// Subscript (e.g., `data['user']`, `data['items'][0]`)
    Index {
        target: Box<Expression>,
        index: Box<Expression>,
    },

    /// Binary operation
    Binary {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
    },

    /// Unary operation
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// Chained comparison (e.g., `1 < x <= 5`), equivalent to the pairwise
    /// comparisons joined with `and`, each operand evaluated once
    Comparison {
        left: Box<Expression>,
        comparisons: Vec<(Operator, Expression)>,
    },

    /// Function call
    FunctionCall { name: String, args: Vec<Expression> },

    /// Conditional (`true_expr if condition else false_expr`)
    Ternary {
        condition: Box<Expression>,
        true_expr: Box<Expression>,
        false_expr: Box<Expression>,
    },
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// Logical NOT (not, !)
    Not,
    /// Arithmetic negation (-)
    Negate,
    /// Unary plus (+)
    Plus,
}

impl Expression {
    /// Create a literal expression
    pub fn literal(value: Value) -> Self {
        Expression::Literal(value)
    }

    /// Create a name reference
    pub fn name(name: impl Into<String>) -> Self {
        Expression::Name(name.into())
    }

    /// Create an attribute access expression
    pub fn attribute(target: Expression, name: impl Into<String>) -> Self {
        Expression::Attribute {
            target: Box::new(target),
            name: name.into(),
        }
    }

    /// Create a subscript expression
    pub fn index(target: Expression, index: Expression) -> Self {
        Expression::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    /// Create a binary expression
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Create a unary expression
    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Create a function call expression
    pub fn function_call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Create a ternary expression
    pub fn ternary(condition: Expression, true_expr: Expression, false_expr: Expression) -> Self {
        Expression::Ternary {
            condition: Box::new(condition),
            true_expr: Box::new(true_expr),
            false_expr: Box::new(false_expr),
        }
    }

    /// Nesting depth of the tree; a lone literal or name has depth 1
    pub fn depth(&self) -> usize {
        let children = match self {
            Expression::Literal(_) | Expression::Name(_) => 0,
            Expression::List(items) => items.iter().map(Expression::depth).max().unwrap_or(0),
            Expression::Attribute { target, .. } => target.depth(),
            Expression::Index { target, index } => target.depth().max(index.depth()),
            Expression::Binary { left, right, .. } => left.depth().max(right.depth()),
            Expression::Unary { operand, .. } => operand.depth(),
            Expression::Comparison { left, comparisons } => comparisons
                .iter()
                .map(|(_, e)| e.depth())
                .fold(left.depth(), usize::max),
            Expression::FunctionCall { args, .. } => {
                args.iter().map(Expression::depth).max().unwrap_or(0)
            }
            Expression::Ternary {
                condition,
                true_expr,
                false_expr,
            } => condition
                .depth()
                .max(true_expr.depth())
                .max(false_expr.depth()),
        };
        children + 1
    }
}
