//! ruleval Runtime - evaluates rule ASTs against bound data
//!
//! The evaluator walks the [`Expression`](ruleval_core::ast::Expression) tree
//! directly. Names resolve only through the [`EvaluationContext`], calls
//! resolve only to [`BuiltinFunction`]s, and string and power operations are
//! bounded by [`EvalLimits`].

pub mod context;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod limits;
mod operators;

pub use context::EvaluationContext;
pub use error::{Result, RuntimeError};
pub use evaluator::Evaluator;
pub use functions::BuiltinFunction;
pub use limits::EvalLimits;
