//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ruleval_sdk::SdkError;
use serde_json::json;
use thiserror::Error;

/// Server error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServerError {
    /// Request carried no rule, or an empty one
    #[error("Rule is required")]
    RuleRequired,

    /// Rule evaluated to something other than a boolean
    #[error("Invalid rule")]
    InvalidRule,

    /// Rule failed to parse or evaluate
    #[error("{0}")]
    EvaluationFailed(String),

    /// Malformed request body
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::RuleRequired | ServerError::InvalidRule | ServerError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::EvaluationFailed(_) | ServerError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::NonBoolean { .. } => ServerError::InvalidRule,
            SdkError::ConfigError(msg) => ServerError::InternalError(msg),
            other => ServerError::EvaluationFailed(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
