//! Fallback probe
//!
//! Requests a model that does not exist. A conforming router substitutes
//! an available model and answers 200 instead of erroring.

use async_trait::async_trait;

use super::{Probe, ProbeResult};
use crate::router::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, RequestMetadata, RouterClient,
};

/// Verifies the router falls back when the requested model is unavailable
pub struct FallbackProbe {
    name: String,
    prompt: String,
}

impl FallbackProbe {
    pub const NAME: &'static str = "fallback_mechanism";
    pub const PROMPT: &'static str = "Test fallback";
    /// Deliberately unroutable model name
    pub const MISSING_MODEL: &'static str = "non-existent-model";

    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }

    fn request(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: Self::MISSING_MODEL.to_string(),
            messages: vec![ChatMessage::user(self.prompt.as_str())],
            metadata: RequestMetadata::force_fallback(),
        }
    }
}

impl Default for FallbackProbe {
    fn default() -> Self {
        Self::new(Self::NAME, Self::PROMPT)
    }
}

#[async_trait]
impl Probe for FallbackProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, client: &RouterClient) -> ProbeResult {
        let exchange = match client.chat_completion(&self.request()).await {
            Ok(exchange) => exchange,
            Err(e) => {
                return ProbeResult::failed(&self.name, format!("Fallback test error: {}", e))
            }
        };

        if exchange.status != 200 {
            return ProbeResult::failed(
                &self.name,
                format!("Fallback failed with status {}", exchange.status),
            );
        }

        let result = ProbeResult::passed(&self.name, "Fallback working correctly");

        // The substitute model is evidence only; its absence is not a failure
        match serde_json::from_str::<ChatCompletionResponse>(&exchange.body)
            .ok()
            .and_then(|r| r.model)
        {
            Some(model) => result.with_model(model),
            None => result,
        }
    }
}
