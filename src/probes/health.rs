//! Router liveness probe

use async_trait::async_trait;

use super::{Probe, ProbeResult};
use crate::router::RouterClient;

/// Checks that `GET /health` answers 200
pub struct HealthProbe {
    name: String,
}

impl HealthProbe {
    pub const NAME: &'static str = "health_check";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HealthProbe {
    fn default() -> Self {
        Self::new(Self::NAME)
    }
}

#[async_trait]
impl Probe for HealthProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, client: &RouterClient) -> ProbeResult {
        match client.health().await {
            Ok(200) => ProbeResult::passed(&self.name, "Router is healthy"),
            Ok(status) => {
                ProbeResult::failed(&self.name, format!("Health check failed: {}", status))
            }
            // Connect errors already read "Cannot connect to router: ..."
            Err(e) => ProbeResult::failed(&self.name, e.to_string()),
        }
    }
}
