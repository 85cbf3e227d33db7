//! Tiered routing probe
//!
//! Sends a prompt with a task-type hint and lets the router pick the model,
//! then checks that the model it picked belongs to the expected tier.

use std::sync::Arc;

use async_trait::async_trait;

use super::{Probe, ProbeResult};
use crate::router::{
    ChatCompletionRequest, ChatMessage, RequestMetadata, RouterClient, ROUTER_AUTO_MODEL,
};
use crate::tiers::{Tier, TierRegistry};

/// Verifies that a task type is dispatched to the expected tier
pub struct RoutingProbe {
    name: String,
    task_type: String,
    prompt: String,
    expected_tier: Tier,
    registry: Arc<TierRegistry>,
}

impl RoutingProbe {
    pub fn new(
        name: impl Into<String>,
        task_type: impl Into<String>,
        prompt: impl Into<String>,
        expected_tier: Tier,
        registry: Arc<TierRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            task_type: task_type.into(),
            prompt: prompt.into(),
            expected_tier,
            registry,
        }
    }

    fn request(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: ROUTER_AUTO_MODEL.to_string(),
            messages: vec![ChatMessage::user(self.prompt.as_str())],
            metadata: RequestMetadata::task_type(self.task_type.as_str()),
        }
    }

    /// Judge an observed model against the expected tier
    fn verdict(&self, model: String) -> ProbeResult {
        let observed = self.registry.classify(&model);

        let result = if observed == self.expected_tier {
            ProbeResult::passed(&self.name, format!("Routed to {}", model))
        } else {
            ProbeResult::failed(
                &self.name,
                format!(
                    "Wrong tier: expected {}, got {} ({})",
                    self.expected_tier, observed, model
                ),
            )
        };

        result
            .with_model(model)
            .with_expected_tier(self.expected_tier)
    }
}

#[async_trait]
impl Probe for RoutingProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, client: &RouterClient) -> ProbeResult {
        match client.served_model(&self.request()).await {
            Ok(model) => self.verdict(model),
            Err(e) => ProbeResult::failed(&self.name, format!("Routing test failed: {}", e))
                .with_expected_tier(self.expected_tier),
        }
    }
}
