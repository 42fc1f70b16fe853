//! Request and response types

use ruleval_sdk::RuleEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RuleEngine>,
}

/// Body of `POST /evaluate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
    /// Rule expression; missing, null and empty are all rejected
    #[serde(default)]
    pub rule: Option<String>,

    /// Data bound as `data`; missing or null binds an empty object
    #[serde(default)]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Successful evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub result: bool,
}
