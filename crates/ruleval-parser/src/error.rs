//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Invalid expression syntax
    #[error("Invalid expression syntax: {0}")]
    InvalidExpression(String),

    /// Character that starts no token
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// String literal without a closing quote
    #[error("Unterminated string starting at position {position}")]
    UnterminatedString { position: usize },

    /// Unknown escape inside a string literal
    #[error("Invalid escape sequence '\\{ch}' at position {position}")]
    InvalidEscape { ch: char, position: usize },

    /// Malformed number literal
    #[error("Invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    /// Token that does not fit the grammar
    #[error("Unexpected '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        position: usize,
    },

    /// Input ended early
    #[error("Unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: String },

    /// Nesting limit exceeded
    #[error("Expression is nested deeper than the maximum of {max}")]
    TooDeep { max: usize },

    /// Length limit exceeded
    #[error("Rule is {length} characters long, the maximum is {max}")]
    TooLong { length: usize, max: usize },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
