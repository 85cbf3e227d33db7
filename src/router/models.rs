//! Router API data models
//!
//! Data structures for the OpenAI-compatible chat completion endpoint
//! exposed by the router.

use serde::{Deserialize, Serialize};

/// Model name asking the router to choose a model itself
pub const ROUTER_AUTO_MODEL: &str = "router";

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub metadata: RequestMetadata,
}

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    /// Plain-text user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Text(text.into()),
        }
    }

    /// Multi-part user message (e.g., text plus an image)
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Parts(parts),
        }
    }
}

/// Message content: a bare string or a sequence of typed parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// One part of a multi-modal message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

/// Reference to an image by URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

/// Routing hints attached to a request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequestMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_fallback: Option<bool>,
}

impl RequestMetadata {
    pub fn task_type(task_type: impl Into<String>) -> Self {
        Self {
            task_type: Some(task_type.into()),
            ..Self::default()
        }
    }

    pub fn force_fallback() -> Self {
        Self {
            force_fallback: Some(true),
            ..Self::default()
        }
    }
}

/// The part of a chat completion response this crate inspects
///
/// Only `model` matters; every other field the router returns is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
}

/// Raw outcome of a chat completion call
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub status: u16,
    pub body: String,
}
