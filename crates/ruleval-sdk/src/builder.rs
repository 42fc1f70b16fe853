//! Builder pattern for RuleEngine

use crate::config::EngineConfig;
use crate::engine::RuleEngine;
use crate::error::{Result, SdkError};

/// Builder for RuleEngine
///
/// # Example
///
/// ```rust,ignore
/// use ruleval_sdk::RuleEngineBuilder;
///
/// let engine = RuleEngineBuilder::new()
///     .max_rule_length(4096)
///     .max_string_length(10_000)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleEngineBuilder {
    config: EngineConfig,
}

impl RuleEngineBuilder {
    /// Create a new builder with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum rule length in characters
    pub fn max_rule_length(mut self, length: usize) -> Self {
        self.config.max_rule_length = length;
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Set the maximum length of built strings
    pub fn max_string_length(mut self, length: usize) -> Self {
        self.config.max_string_length = length;
        self
    }

    /// Set the maximum `**` exponent magnitude
    pub fn max_power(mut self, power: f64) -> Self {
        self.config.max_power = power;
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<RuleEngine> {
        self.config.validate().map_err(SdkError::ConfigError)?;
        Ok(RuleEngine::new(self.config))
    }
}
