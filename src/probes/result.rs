//! Probe verdicts

use serde::{Deserialize, Serialize};

use crate::tiers::Tier;

/// Verdict and evidence from one probe execution
///
/// The optional fields are the only evidence a probe may attach; consumers
/// can rely on this exact shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Probe name (e.g., "routing_complex")
    pub name: String,
    pub success: bool,
    /// Human-readable explanation of the verdict
    pub message: String,
    /// Model the router reported as having served the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    /// Tier the probe expected the request to land on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_tier: Option<Tier>,
}

impl ProbeResult {
    pub fn passed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, true, message)
    }

    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, false, message)
    }

    fn new(name: impl Into<String>, success: bool, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success,
            message: message.into(),
            model_used: None,
            expected_tier: None,
        }
    }

    /// Attach the observed model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_used = Some(model.into());
        self
    }

    /// Attach the expected tier
    pub fn with_expected_tier(mut self, tier: Tier) -> Self {
        self.expected_tier = Some(tier);
        self
    }
}
