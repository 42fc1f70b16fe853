//! Operators for rule expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    // Comparison operators
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,

    // Arithmetic operators
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// True division (/)
    Div,
    /// Floor division (//)
    FloorDiv,
    /// Modulo (%)
    Mod,
    /// Exponentiation (**)
    Pow,

    // Logical operators
    /// Logical AND (and, &&)
    And,
    /// Logical OR (or, ||)
    Or,

    // Membership operators
    /// In (element in array, substring, object key)
    In,
    /// Not in
    NotIn,

    // Identity operators
    /// Is (None/True/False identity)
    Is,
    /// Is not
    IsNot,
}

impl Operator {
    /// Returns true for every operator that may appear in a comparison chain
    /// (`a < b <= c`, `x in y`, `x is None`).
    pub fn is_comparison(&self) -> bool {
        self.is_ordering()
            || matches!(
                self,
                Operator::Eq
                    | Operator::Ne
                    | Operator::In
                    | Operator::NotIn
                    | Operator::Is
                    | Operator::IsNot
            )
    }

    /// Returns true if this is an ordering comparison (`<`, `<=`, `>`, `>=`)
    pub fn is_ordering(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le)
    }

    /// Returns true if this is an arithmetic operator
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Operator::Add
                | Operator::Sub
                | Operator::Mul
                | Operator::Div
                | Operator::FloorDiv
                | Operator::Mod
                | Operator::Pow
        )
    }

    /// Returns true if this is a logical operator
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Source form of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::FloorDiv => "//",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Is => "is",
            Operator::IsNot => "is not",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
