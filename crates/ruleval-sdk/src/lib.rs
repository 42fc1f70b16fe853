//! ruleval SDK
//!
//! High-level API for checking rules against JSON data.
//!
//! ```rust,ignore
//! use ruleval_sdk::RuleEngineBuilder;
//! use serde_json::json;
//!
//! let engine = RuleEngineBuilder::new().max_depth(64).build()?;
//! assert!(engine.check("data['x'] > 5", json!({"x": 10}))?);
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::RuleEngineBuilder;
pub use config::EngineConfig;
pub use engine::RuleEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use ruleval_core::Value;
pub use ruleval_parser::ParseError;
pub use ruleval_runtime::RuntimeError;
