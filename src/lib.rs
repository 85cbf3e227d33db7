//! routecheck - black-box conformance checks for multi-model LLM routers
//!
//! This library issues requests against a running router and infers from
//! its responses which model served each one. It verifies tiered routing,
//! fallback on unknown models, and vision routing.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod probes;
pub mod report;
pub mod router;
pub mod tiers;

pub use crate::config::{Config, ReportFormat};
pub use crate::error::{ConfigError, ProbeError};
pub use crate::orchestrator::Orchestrator;
pub use crate::probes::{Probe, ProbeKind, ProbeResult, ProbeSpec};
pub use crate::report::RunSummary;
pub use crate::router::RouterClient;
pub use crate::tiers::{Tier, TierRegistry};
