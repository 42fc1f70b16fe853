//! API endpoint handlers

use super::conversions::{non_empty_rule, request_data};
use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use tracing::{debug, error, info};

/// Rule evaluation endpoint
#[axum::debug_handler]
pub(super) async fn evaluate(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ServerError> {
    info!(
        rule = payload.rule.as_deref().unwrap_or_default(),
        data_fields = payload.data.as_ref().map_or(0, |d| d.len()),
        "Received evaluate request"
    );
    debug!("Request data: {:?}", payload.data);

    let rule = non_empty_rule(payload.rule).ok_or(ServerError::RuleRequired)?;
    let data = request_data(payload.data);

    match state.engine.check(&rule, data) {
        Ok(result) => {
            debug!(result, "Rule evaluated");
            Ok(Json(EvaluateResponse { result }))
        }
        Err(e) => {
            error!("Rule evaluation failed: {}", e);
            Err(e.into())
        }
    }
}
