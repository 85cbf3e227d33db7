//! Mock LLM router for testing
//!
//! Provides wiremock-based mocks for the router endpoints probed by routecheck:
//! - GET /health - Liveness
//! - POST /v1/chat/completions - Chat completions (routing, vision, fallback)
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::router::MockRouter;
//!
//! #[tokio::test]
//! async fn test_with_router_mock() {
//!     let router = MockRouter::start().await;
//!     router.mock_health(200).await;
//!     router.mock_chat_model("claude-opus-4").await;
//!
//!     // Use router.uri() as LITELLM_URL
//!     // ...
//! }
//! ```

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Model name the fallback probe requests
pub const MISSING_MODEL: &str = "non-existent-model";

/// Mock router server wrapper
pub struct MockRouter {
    server: MockServer,
}

impl MockRouter {
    /// Start a new mock router
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get all received requests (for assertion in tests)
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Get only chat completion request bodies, parsed as JSON
    pub async fn chat_request_bodies(&self) -> Vec<Value> {
        self.received_requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() == "/v1/chat/completions")
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }

    // =========================================================================
    // GET /health
    // =========================================================================

    /// Mock the health endpoint with a fixed status
    pub async fn mock_health(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "status": "ok" })))
            .mount(&self.server)
            .await;
    }

    /// Mock the health endpoint of a router mounted under `prefix`
    pub async fn mock_health_under(&self, prefix: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("{}/health", prefix)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock a healthy endpoint that answers only after `delay`
    pub async fn mock_health_delayed(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    // =========================================================================
    // POST /v1/chat/completions
    // =========================================================================

    /// Serve every authenticated chat completion with `model`
    pub async fn mock_chat_model(&self, model: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(RouterTestData::chat_response(model)))
            .mount(&self.server)
            .await;
    }

    /// Serve chat completions hinted with `task_type` using `model`
    pub async fn mock_chat_model_for_task(&self, task_type: &str, model: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({ "metadata": { "task_type": task_type } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(RouterTestData::chat_response(model)))
            .mount(&self.server)
            .await;
    }

    /// Serve chat completions hinted with `task_type` after `delay`
    pub async fn mock_chat_model_for_task_delayed(
        &self,
        task_type: &str,
        model: &str,
        delay: Duration,
    ) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({ "metadata": { "task_type": task_type } })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(RouterTestData::chat_response(model))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer every chat completion with a raw status and body
    pub async fn mock_chat_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(body)
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer requests for the missing model with `status`
    ///
    /// Takes priority over the other chat completion mocks.
    pub async fn mock_fallback_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({ "model": MISSING_MODEL })))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "message": format!("Model {} not found", MISSING_MODEL) }
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Substitute `model` for the missing model
    pub async fn mock_fallback_model(&self, model: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({ "model": MISSING_MODEL })))
            .respond_with(ResponseTemplate::new(200).set_body_json(RouterTestData::chat_response(model)))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Mount a conforming router: healthy, tiered, vision-aware, falling back
    pub async fn mock_conforming_router(&self) {
        self.mock_health(200).await;
        self.mock_fallback_model("gpt-4o-mini").await;
        self.mock_chat_model_for_task("complex", "claude-opus-4").await;
        self.mock_chat_model_for_task("standard", "deepseek-coder").await;
        self.mock_chat_model_for_task("simple", "qwen-coder-7b").await;
        self.mock_chat_model_for_task("vision_analysis", "gpt-4-vision-preview").await;
    }
}

/// Test data factories for router responses
pub struct RouterTestData;

impl RouterTestData {
    /// Minimal OpenAI-style chat completion served by `model`
    pub fn chat_response(model: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": model,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "ok" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6 }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_router_starts() {
        let router = MockRouter::start().await;
        assert!(!router.uri().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_mock_wins_over_generic_chat_mock() {
        let router = MockRouter::start().await;
        router.mock_chat_model("claude-opus").await;
        router.mock_fallback_status(503).await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/v1/chat/completions", router.uri()))
            .header("Content-Type", "application/json")
            .json(&json!({ "model": MISSING_MODEL, "messages": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 503);

        let response = client
            .post(format!("{}/v1/chat/completions", router.uri()))
            .header("Content-Type", "application/json")
            .json(&json!({ "model": "router", "messages": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }
}
