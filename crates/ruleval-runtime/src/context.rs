//! Evaluation context
//!
//! Holds the names a rule can see. A context lives for one evaluation and is
//! never shared between requests.

use crate::error::{Result, RuntimeError};
use ruleval_core::Value;
use std::collections::HashMap;

/// Name under which request data is bound
pub const DATA_BINDING: &str = "data";

/// Name bindings visible to a rule
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    bindings: HashMap<String, Value>,
}

impl EvaluationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with `value` bound as `data`
    pub fn with_data(value: Value) -> Self {
        Self::new().bind(DATA_BINDING, value)
    }

    /// Bind `name` to `value`, replacing any previous binding
    pub fn bind(mut self, name: impl Into<String>, value: Value) -> Self {
        self.bindings.insert(name.into(), value);
        self
    }

    /// Resolve a name
    pub fn lookup(&self, name: &str) -> Result<&Value> {
        self.bindings
            .get(name)
            .ok_or_else(|| RuntimeError::NameNotDefined(name.to_string()))
    }
}
