//! Abstract syntax tree for rule expressions

pub mod expression;
pub mod operator;

pub use expression::{Expression, UnaryOperator};
pub use operator::Operator;
