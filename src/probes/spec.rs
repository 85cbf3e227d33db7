//! Probe descriptions and construction
//!
//! A [`ProbeSpec`] is inert data describing one test case. Turning it into
//! an executable [`Probe`] validates that the case is well formed.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::tiers::{Tier, TierRegistry};

use super::{FallbackProbe, HealthProbe, Probe, RoutingProbe, VisionProbe};

/// Which verification concern a probe covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Health,
    Routing,
    Fallback,
    Vision,
}

/// Description of a single test case
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSpec {
    pub name: String,
    pub kind: ProbeKind,
    /// Task-type hint sent in request metadata
    pub task_type: Option<String>,
    pub prompt: Option<String>,
    /// Required for routing probes
    pub expected_tier: Option<Tier>,
}

impl ProbeSpec {
    pub fn health() -> Self {
        Self {
            name: HealthProbe::NAME.to_string(),
            kind: ProbeKind::Health,
            task_type: None,
            prompt: None,
            expected_tier: None,
        }
    }

    /// Routing case named `routing_<task_type>`
    pub fn routing(task_type: &str, prompt: &str, expected_tier: Tier) -> Self {
        Self {
            name: format!("routing_{}", task_type),
            kind: ProbeKind::Routing,
            task_type: Some(task_type.to_string()),
            prompt: Some(prompt.to_string()),
            expected_tier: Some(expected_tier),
        }
    }

    pub fn fallback() -> Self {
        Self {
            name: FallbackProbe::NAME.to_string(),
            kind: ProbeKind::Fallback,
            task_type: None,
            prompt: Some(FallbackProbe::PROMPT.to_string()),
            expected_tier: None,
        }
    }

    pub fn vision() -> Self {
        Self {
            name: VisionProbe::NAME.to_string(),
            kind: ProbeKind::Vision,
            task_type: Some(VisionProbe::TASK_TYPE.to_string()),
            prompt: Some(VisionProbe::PROMPT.to_string()),
            expected_tier: None,
        }
    }

    /// The standard battery, in reporting order
    pub fn default_battery() -> Vec<Self> {
        vec![
            Self::health(),
            Self::routing("complex", "Design a microservices architecture", Tier::Premium),
            Self::routing("standard", "Write a function to sort an array", Tier::Standard),
            Self::routing("simple", "Format this code", Tier::Standard),
            Self::vision(),
            Self::fallback(),
        ]
    }

    /// Build the executable probe, rejecting incomplete routing cases
    pub fn into_probe(self, registry: Arc<TierRegistry>) -> Result<Box<dyn Probe>, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("probe name cannot be empty"));
        }

        let probe: Box<dyn Probe> = match self.kind {
            ProbeKind::Health => Box::new(HealthProbe::new(self.name)),
            ProbeKind::Fallback => Box::new(FallbackProbe::new(
                self.name,
                self.prompt.unwrap_or_else(|| FallbackProbe::PROMPT.to_string()),
            )),
            ProbeKind::Vision => Box::new(VisionProbe::new(
                self.name,
                self.prompt.unwrap_or_else(|| VisionProbe::PROMPT.to_string()),
                registry,
            )),
            ProbeKind::Routing => {
                let (Some(task_type), Some(prompt), Some(expected_tier)) =
                    (&self.task_type, &self.prompt, self.expected_tier)
                else {
                    return Err(
                        self.invalid("routing probes need a task type, a prompt and an expected tier")
                    );
                };
                if expected_tier == Tier::Unknown {
                    return Err(self.invalid("expected tier cannot be unknown"));
                }
                Box::new(RoutingProbe::new(
                    self.name.clone(),
                    task_type.clone(),
                    prompt.clone(),
                    expected_tier,
                    registry,
                ))
            }
        };

        Ok(probe)
    }

    fn invalid(&self, reason: &str) -> ConfigError {
        ConfigError::InvalidProbe {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}
