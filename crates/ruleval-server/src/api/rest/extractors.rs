//! Request body extraction
//!
//! Turns axum's JSON rejections into the `{"error": ...}` body every other
//! failure uses.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

/// JSON body whose rejection names the expected `{rule, data}` shape
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let message = rejection_message(&rejection);
                tracing::warn!(status = %rejection.status(), "Rejected request body: {}", message);
                ServerError::InvalidRequest(message)
            })?;
        Ok(Self(body))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        JsonRejection::JsonSyntaxError(err) => {
            format!("Request body is not valid JSON: {}", err.body_text())
        }
        JsonRejection::JsonDataError(err) => format!(
            "Expected {{\"rule\": string, \"data\": object}}: {}",
            err.body_text()
        ),
        other => format!("Unreadable request body: {}", other.body_text()),
    }
}
