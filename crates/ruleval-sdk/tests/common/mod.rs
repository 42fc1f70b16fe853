//! Common test utilities for SDK integration tests

use ruleval_sdk::{RuleEngine, RuleEngineBuilder, SdkError};
use serde_json::Value as JsonValue;

/// Test helper wrapping a RuleEngine with fixed request data
pub struct TestEngine {
    engine: RuleEngine,
    data: JsonValue,
}

impl TestEngine {
    /// Create a test engine with default limits and empty data
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::default(),
            data: JsonValue::Object(Default::default()),
        }
    }

    /// Create a test engine from a configured builder
    #[allow(dead_code)]
    pub fn with_builder(builder: RuleEngineBuilder) -> Self {
        Self {
            engine: builder.build().expect("valid engine config"),
            data: JsonValue::Object(Default::default()),
        }
    }

    /// Set the request data bound as `data`
    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }

    /// Check a rule against the configured data
    pub fn check(&self, rule: &str) -> Result<bool, SdkError> {
        self.engine.check(rule, self.data.clone())
    }

    /// Assert that a rule evaluates to `expected`
    pub fn assert_rule(&self, rule: &str, expected: bool) {
        match self.check(rule) {
            Ok(actual) => assert_eq!(actual, expected, "rule: {}", rule),
            Err(e) => panic!("rule '{}' failed: {}", rule, e),
        }
    }

    /// Assert that a rule fails to evaluate
    #[allow(dead_code)]
    pub fn assert_error(&self, rule: &str) -> SdkError {
        match self.check(rule) {
            Ok(value) => panic!("rule '{}' unexpectedly returned {}", rule, value),
            Err(e) => e,
        }
    }
}
