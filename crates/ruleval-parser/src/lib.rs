//! ruleval Parser - rule source text to AST
//!
//! Turns a rule string into an [`Expression`](ruleval_core::ast::Expression)
//! with a hand-written lexer and a recursive-descent parser. Only the
//! constructs of the restricted rule language are recognised; anything else
//! is a [`ParseError`].

pub mod error;
pub mod expression_parser;
pub mod lexer;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use expression_parser::{ExpressionParser, ParseLimits};
pub use lexer::{Lexer, Spanned, Token};
