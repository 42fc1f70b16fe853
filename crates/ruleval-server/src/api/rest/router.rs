//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{routing::post, Router};
use ruleval_sdk::RuleEngine;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(engine: Arc<RuleEngine>) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/evaluate", post(evaluate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
