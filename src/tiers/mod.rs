//! Tier classification module
//!
//! Maps model identifiers reported by the router onto coarse capability
//! tiers, using a [`TierRegistry`] of identifying substrings.

pub mod classifier;
pub mod config;

use serde::{Deserialize, Serialize};

pub use config::{TierEntry, TierRegistry};

/// Capability/cost bucket a model belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Most capable, most expensive models (e.g., claude-opus)
    Premium,
    /// Balanced models for everyday coding work (e.g., deepseek-coder)
    Standard,
    /// Narrow models tuned for one modality or domain (e.g., qwen-math)
    Specialist,
    /// No registered substring matched
    Unknown,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Premium => write!(f, "premium"),
            Tier::Standard => write!(f, "standard"),
            Tier::Specialist => write!(f, "specialist"),
            Tier::Unknown => write!(f, "unknown"),
        }
    }
}
