//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] ruleval_parser::ParseError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] ruleval_runtime::RuntimeError),

    /// Request data the engine cannot represent
    #[error("Invalid data: {0}")]
    InvalidData(#[from] ruleval_core::CoreError),

    /// Rule evaluated to something other than True or False
    #[error("Rule evaluated to {type_name}, expected bool")]
    NonBoolean { type_name: &'static str },
}

impl SdkError {
    /// Whether the error comes from the rule's result rather than its evaluation
    pub fn is_non_boolean(&self) -> bool {
        matches!(self, SdkError::NonBoolean { .. })
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ruleval_parser::ParseError;
    use ruleval_runtime::RuntimeError;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("max_depth must be positive".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("max_depth"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let error: SdkError = ParseError::UnexpectedCharacter {
            ch: '=',
            position: 11,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Parser error: Unexpected character '=' at position 11"
        );
    }

    #[test]
    fn test_runtime_error_conversion() {
        let error: SdkError = RuntimeError::KeyNotFound("x".to_string()).into();
        assert_eq!(error.to_string(), "Runtime error: Key 'x' not found");
        assert!(!error.is_non_boolean());
    }

    #[test]
    fn test_non_boolean() {
        let error = SdkError::NonBoolean {
            type_name: "number",
        };
        assert!(error.is_non_boolean());
        assert_eq!(error.to_string(), "Rule evaluated to number, expected bool");
    }
}
