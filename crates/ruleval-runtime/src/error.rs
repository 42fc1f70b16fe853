//! Runtime error types

use ruleval_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Name not bound in the evaluation context
    #[error("Name '{0}' is not defined")]
    NameNotDefined(String),

    /// Missing object key
    #[error("Key '{0}' not found")]
    KeyNotFound(String),

    /// Array or string index outside the value
    #[error("Index {index} out of range for length {length}")]
    IndexOutOfRange { index: i64, length: usize },

    /// Attribute names starting with an underscore are never resolved
    #[error("Access to attribute '{0}' is not allowed")]
    ForbiddenAttribute(String),

    /// Operand types the operation does not support
    #[error("Type error: {0}")]
    TypeError(String),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Finite operands produced a non-finite result
    #[error("Numeric overflow in '{0}'")]
    Overflow(String),

    /// Value outside the domain of the operation
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Call of a name that is not a built-in function
    #[error("Function '{0}' is not defined")]
    FunctionNotDefined(String),

    /// Wrong number of arguments for a built-in function
    #[error("{name}() takes exactly {expected} argument(s), got {actual}")]
    ArgumentCount {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Evaluation limit exceeded
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    /// Error raised by a core value operation
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
