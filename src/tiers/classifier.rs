//! Model identifier classification
//!
//! Pure functions over a [`TierRegistry`]; no I/O, no state.

use super::{Tier, TierRegistry};

impl TierRegistry {
    /// Classify a model identifier into a tier
    ///
    /// Tiers are tried in declaration order and the first tier with a
    /// substring contained in `model` wins. Matching is case-sensitive.
    pub fn classify(&self, model: &str) -> Tier {
        self.tiers
            .iter()
            .find(|entry| entry.models.iter().any(|m| model.contains(m.as_str())))
            .map(|entry| entry.tier)
            .unwrap_or(Tier::Unknown)
    }

    /// Whether `model` classifies into `expected`
    pub fn check_tier_match(&self, model: &str, expected: Tier) -> bool {
        self.classify(model) == expected
    }

    /// Whether `model` looks like a multi-modal model
    ///
    /// True if the lowercased identifier mentions "vision", or the raw
    /// identifier contains one of the registry's vision markers.
    pub fn is_vision_capable(&self, model: &str) -> bool {
        model.to_lowercase().contains("vision")
            || self
                .vision_markers
                .iter()
                .any(|marker| model.contains(marker.as_str()))
    }
}
