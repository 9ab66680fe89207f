use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error renders as the `{success: false, error: "<msg>"}` envelope the
/// frontends expect. Upstream failure detail is logged server-side only —
/// callers get the generic public message, never the Anthropic error body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{public}: {source}")]
    Upstream {
        /// Generic message returned to the caller.
        public: &'static str,
        source: LlmError,
    },
}

impl AppError {
    /// Wraps a model-call failure with the generic message for this endpoint.
    pub fn upstream(public: &'static str, source: LlmError) -> Self {
        AppError::Upstream { public, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream { public, source } => {
                tracing::error!("Upstream LLM error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*public).to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejection renders the standard error envelope.
///
/// A syntactically malformed body is a client error like any other
/// validation failure; axum's default rejection would answer in plain text
/// and bypass the envelope.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(format!("Invalid JSON body: {rejection}")))?;
        Ok(AppJson(value))
    }
}
