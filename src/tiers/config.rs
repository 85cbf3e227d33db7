//! Tier registry configuration
//!
//! The registry is policy data: which substrings mark a model as belonging
//! to which tier, and which mark it as vision-capable. Entry order is the
//! tie-break order used by the classifier.
//!
//! File format (JSON):
//!
//! ```json
//! {
//!   "tiers": [
//!     { "tier": "premium", "models": ["claude-opus", "gpt-4"] },
//!     { "tier": "standard", "models": ["deepseek-coder"] }
//!   ],
//!   "visionMarkers": ["gpt-4"]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Tier;
use crate::error::ConfigError;

/// One tier and the model-identifier substrings that indicate membership
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierEntry {
    pub tier: Tier,
    pub models: Vec<String>,
}

impl TierEntry {
    pub fn new(tier: Tier, models: &[&str]) -> Self {
        Self {
            tier,
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Ordered tier-to-substring mapping plus vision markers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierRegistry {
    /// Tiers in classification order (first match wins)
    pub tiers: Vec<TierEntry>,
    /// Substrings marking a multi-modal-capable model family
    #[serde(default)]
    pub vision_markers: Vec<String>,
}

impl Default for TierRegistry {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierEntry::new(Tier::Premium, &["claude-opus", "claude-sonnet", "gpt-4"]),
                TierEntry::new(
                    Tier::Standard,
                    &["deepseek-coder", "gemini-flash", "qwen-coder"],
                ),
                TierEntry::new(
                    Tier::Specialist,
                    &["llama-vision", "qwen-math", "mistral-fast"],
                ),
            ],
            vision_markers: vec!["gpt-4".to_string()],
        }
    }
}

impl TierRegistry {
    /// Parse and validate a registry from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let registry: TierRegistry = serde_json::from_str(json)
            .map_err(|e| ConfigError::InvalidRegistry(e.to_string()))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load and validate a registry from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading tier registry");

        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::RegistryFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let registry = Self::from_json(&json).map_err(|e| ConfigError::RegistryFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!(
            path = %path.display(),
            tiers = registry.tiers.len(),
            "Tier registry loaded"
        );
        Ok(registry)
    }

    /// Load from `path` when given, otherwise use the built-in default
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject registries the classifier cannot interpret unambiguously
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for entry in &self.tiers {
            if entry.tier == Tier::Unknown {
                return Err(ConfigError::InvalidRegistry(
                    "the unknown tier cannot have registered models".to_string(),
                ));
            }
            if !seen.insert(entry.tier) {
                return Err(ConfigError::InvalidRegistry(format!(
                    "tier {} is declared more than once",
                    entry.tier
                )));
            }
            // An empty substring is contained in every identifier
            if entry.models.iter().any(|m| m.is_empty()) {
                return Err(ConfigError::InvalidRegistry(format!(
                    "tier {} has an empty model substring",
                    entry.tier
                )));
            }
        }

        if self.vision_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::InvalidRegistry(
                "vision markers cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Substrings registered for a tier, in declaration order
    pub fn models_for_tier(&self, tier: Tier) -> &[String] {
        self.tiers
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.models.as_slice())
            .unwrap_or(&[])
    }
}
