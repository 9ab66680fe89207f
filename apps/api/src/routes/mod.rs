pub mod health;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::brief::handlers::handle_generate_brief;
use crate::state::AppState;
use crate::summarize::handlers::{handle_summarize, handle_summarize_batch};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/summarize", post(handle_summarize))
        .route("/api/summarize-batch", post(handle_summarize_batch))
        .route("/api/brief", post(handle_generate_brief))
        .with_state(state)
}

/// Permissive CORS for the browser form frontends: any origin, GET/POST plus
/// OPTIONS preflight, Content-Type. Applied on top of the router so every
/// response, errors included, carries the headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, DEFAULT_MODEL};
    use crate::llm_client::{ContentBlock, LlmError, LlmResponse, ModelInvoker};

    struct CannedInvoker;

    #[async_trait]
    impl ModelInvoker for CannedInvoker {
        async fn invoke(
            &self,
            _prompt: &str,
            _system: Option<&str>,
            _max_tokens: u32,
        ) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse {
                content: vec![ContentBlock {
                    block_type: "text".to_string(),
                    text: Some(
                        r#"{"summary":"S","priority":"low","suggestedAction":"A"}"#.to_string(),
                    ),
                }],
                usage: None,
            })
        }
    }

    /// The router as served: routes plus the CORS layer from `main`.
    fn app() -> Router {
        let state = AppState {
            invoker: Arc::new(CannedInvoker),
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                model: DEFAULT_MODEL.to_string(),
                port: 3001,
                rust_log: "info".to_string(),
            },
        };
        build_router(state).layer(cors_layer())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_on_post_route_is_405() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/summarize")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_preflight_options_is_answered_by_the_cors_layer() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/summarize")
            .header(header::ORIGIN, "https://forms.example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        let allowed = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(allowed.contains("POST"));
        assert!(allowed.contains("OPTIONS"));
    }

    #[tokio::test]
    async fn test_post_response_carries_allow_origin() {
        let body = json!({
            "title": "Cannot log in",
            "description": "Reset emails never arrive",
            "customerEmail": "jo@example.com"
        });
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/summarize")
            .header(header::ORIGIN, "https://forms.example.com")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["priority"], "low");
    }

    #[tokio::test]
    async fn test_malformed_json_body_renders_error_envelope() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/summarize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_validation_error_renders_envelope_through_router() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/brief")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"websiteUrl": "example.com"}).to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("businessDescription"));
    }

    #[tokio::test]
    async fn test_health_route_is_wired() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
