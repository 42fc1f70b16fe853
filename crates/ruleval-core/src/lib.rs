//! ruleval Core - Core types and definitions for the ruleval rule evaluator
//!
//! This crate provides the fundamental types shared by the other crates:
//! - Value types for runtime data
//! - AST (Abstract Syntax Tree) definitions for rule expressions
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::Value;
