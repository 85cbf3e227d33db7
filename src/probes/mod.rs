//! Router probes
//!
//! Each probe is one self-contained verification scenario: it performs a
//! single request against the router and turns whatever happens into a
//! [`ProbeResult`]. Probes never return errors; failures are verdicts.

pub mod fallback;
pub mod health;
pub mod result;
pub mod routing;
pub mod spec;
pub mod vision;

use async_trait::async_trait;

use crate::router::RouterClient;

pub use fallback::FallbackProbe;
pub use health::HealthProbe;
pub use result::ProbeResult;
pub use routing::RoutingProbe;
pub use spec::{ProbeKind, ProbeSpec};
pub use vision::VisionProbe;

/// Trait implemented by every verification scenario
///
/// Implementations MUST:
/// - Perform at most one request through `client`
/// - Convert every failure (transport, status, parsing) into a failed result
#[async_trait]
pub trait Probe: Send + Sync {
    /// Name used in reports (e.g., "routing_complex")
    fn name(&self) -> &str;

    /// Run the scenario against the router
    async fn execute(&self, client: &RouterClient) -> ProbeResult;
}
