//! Type system for ruleval
//!
//! Runtime values bound into rule scope and produced by evaluation.

pub mod value;

pub use value::Value;
