//! Configuration types for RuleEngine

use ruleval_parser::ParseLimits;
use ruleval_runtime::EvalLimits;
use serde::{Deserialize, Serialize};

/// Highest accepted `max_depth`. Parsing and evaluation recurse once per
/// level, and deeper rules can exhaust a worker thread's stack.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Engine configuration: the limits applied to every rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum rule length in characters
    pub max_rule_length: usize,

    /// Maximum nesting depth of a parsed rule
    pub max_depth: usize,

    /// Maximum length of a string built by `+` or `*`, or a list built by `+`
    pub max_string_length: usize,

    /// Maximum magnitude of a `**` exponent
    pub max_power: f64,
}

impl EngineConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits handed to the parser
    pub fn parse_limits(&self) -> ParseLimits {
        ParseLimits {
            max_length: self.max_rule_length,
            max_depth: self.max_depth,
        }
    }

    /// Limits handed to the evaluator
    pub fn eval_limits(&self) -> EvalLimits {
        EvalLimits {
            max_string_length: self.max_string_length,
            max_power: self.max_power,
        }
    }

    /// Reject limits that would make every rule fail
    pub fn validate(&self) -> Result<(), String> {
        if self.max_rule_length == 0 {
            return Err("max_rule_length must be greater than 0".to_string());
        }
        if self.max_depth == 0 {
            return Err("max_depth must be greater than 0".to_string());
        }
        if self.max_depth > MAX_DEPTH_CEILING {
            return Err(format!(
                "max_depth must be at most {}, got {}",
                MAX_DEPTH_CEILING, self.max_depth
            ));
        }
        if self.max_power.is_nan() || self.max_power < 0.0 {
            return Err(format!("max_power must be non-negative, got {}", self.max_power));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let parse = ParseLimits::default();
        let eval = EvalLimits::default();
        Self {
            max_rule_length: parse.max_length,
            max_depth: parse.max_depth,
            max_string_length: eval.max_string_length,
            max_power: eval.max_power,
        }
    }
}
