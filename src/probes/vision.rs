//! Vision routing probe

use std::sync::Arc;

use async_trait::async_trait;

use super::{Probe, ProbeResult};
use crate::router::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, RequestMetadata, RouterClient,
    ROUTER_AUTO_MODEL,
};
use crate::tiers::TierRegistry;

/// Verifies that a text+image request lands on a multi-modal model
pub struct VisionProbe {
    name: String,
    prompt: String,
    registry: Arc<TierRegistry>,
}

impl VisionProbe {
    pub const NAME: &'static str = "vision_routing";
    pub const TASK_TYPE: &'static str = "vision_analysis";
    pub const PROMPT: &'static str = "What is in this image?";
    pub const IMAGE_URL: &'static str = "https://example.com/test.jpg";

    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        registry: Arc<TierRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            registry,
        }
    }

    fn request(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: ROUTER_AUTO_MODEL.to_string(),
            messages: vec![ChatMessage::user_parts(vec![
                ContentPart::Text {
                    text: self.prompt.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: Self::IMAGE_URL.to_string(),
                    },
                },
            ])],
            metadata: RequestMetadata::task_type(Self::TASK_TYPE),
        }
    }

    fn verdict(&self, model: String) -> ProbeResult {
        let result = if self.registry.is_vision_capable(&model) {
            ProbeResult::passed(
                &self.name,
                format!("Correctly routed to vision model: {}", model),
            )
        } else {
            ProbeResult::failed(&self.name, format!("Wrong model for vision: {}", model))
        };
        result.with_model(model)
    }
}

#[async_trait]
impl Probe for VisionProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, client: &RouterClient) -> ProbeResult {
        match client.served_model(&self.request()).await {
            Ok(model) => self.verdict(model),
            Err(e) => {
                ProbeResult::failed(&self.name, format!("Vision routing test failed: {}", e))
            }
        }
    }
}
