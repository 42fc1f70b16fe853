//! Rule engine
//!
//! Parses a rule and evaluates it with request data bound as `data`. The
//! engine holds only its limits, so one instance serves any number of
//! concurrent callers.

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use ruleval_core::ast::Expression;
use ruleval_core::Value;
use ruleval_parser::{ExpressionParser, ParseLimits};
use ruleval_runtime::{EvalLimits, EvaluationContext, Evaluator};

/// Rule engine
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: EngineConfig,
    parse_limits: ParseLimits,
    eval_limits: EvalLimits,
}

impl RuleEngine {
    /// Create an engine from an already validated configuration
    pub(crate) fn new(config: EngineConfig) -> Self {
        Self {
            parse_limits: config.parse_limits(),
            eval_limits: config.eval_limits(),
            config,
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse a rule without evaluating it
    pub fn parse(&self, rule: &str) -> Result<Expression> {
        Ok(ExpressionParser::parse_with_limits(rule, &self.parse_limits)?)
    }

    /// Parse and evaluate a rule, returning whatever value it produces
    pub fn evaluate(&self, rule: &str, data: serde_json::Value) -> Result<Value> {
        let expr = self.parse(rule)?;
        let context = EvaluationContext::with_data(Value::try_from(data)?);
        let value = Evaluator::new(&context, &self.eval_limits).evaluate(&expr)?;

        tracing::debug!(
            rule_length = rule.len(),
            result_type = value.type_name(),
            "Rule evaluated"
        );
        Ok(value)
    }

    /// Evaluate a rule that must produce a boolean
    pub fn check(&self, rule: &str, data: serde_json::Value) -> Result<bool> {
        let value = self.evaluate(rule, data)?;
        value.as_bool().ok_or(SdkError::NonBoolean {
            type_name: value.type_name(),
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruleval_core::CoreError;
    use ruleval_parser::ParseError;
    use ruleval_runtime::RuntimeError;
    use serde_json::json;

    #[test]
    fn test_check_true_and_false() {
        let engine = RuleEngine::default();
        assert_eq!(engine.check("data['x'] > 5", json!({"x": 10})), Ok(true));
        assert_eq!(engine.check("data['x'] > 5", json!({"x": 1})), Ok(false));
    }

    #[test]
    fn test_check_rejects_non_boolean() {
        let engine = RuleEngine::default();
        assert_eq!(
            engine.check("1 + 1", json!({})),
            Err(SdkError::NonBoolean {
                type_name: "number"
            })
        );
        // Truthy is not enough
        assert!(engine.check("data.name", json!({"name": "x"})).is_err());
    }

    #[test]
    fn test_evaluate_returns_raw_value() {
        let engine = RuleEngine::default();
        assert_eq!(engine.evaluate("1 + 1", json!({})), Ok(Value::Number(2.0)));
    }

    #[test]
    fn test_inexact_integers_are_rejected() {
        let engine = RuleEngine::default();
        let data = json!({"a": 9_007_199_254_740_993_u64, "b": 9_007_199_254_740_992_u64});
        assert!(matches!(
            engine.check("data['a'] == data['b']", data),
            Err(SdkError::InvalidData(CoreError::InvalidValue(_)))
        ));
        let exact = json!({"a": 9_007_199_254_740_992_u64});
        assert_eq!(engine.check("data['a'] == 9007199254740992", exact), Ok(true));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let engine = RuleEngine::default();
        assert!(matches!(
            engine.check("data.foo ===", json!({"foo": 1})),
            Err(SdkError::ParseError(ParseError::UnexpectedCharacter { .. }))
        ));
    }

    #[test]
    fn test_runtime_error_is_reported() {
        let engine = RuleEngine::default();
        assert_eq!(
            engine.check("data['missing'] > 1", json!({})),
            Err(SdkError::RuntimeError(RuntimeError::KeyNotFound(
                "missing".to_string()
            )))
        );
    }

    #[test]
    fn test_configured_limits_apply() {
        let engine = RuleEngine::new(EngineConfig {
            max_rule_length: 5,
            ..EngineConfig::default()
        });
        assert!(matches!(
            engine.parse("data['x'] > 5"),
            Err(SdkError::ParseError(ParseError::TooLong { .. }))
        ));
    }
}
