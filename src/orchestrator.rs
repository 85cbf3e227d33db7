//! Probe orchestration
//!
//! Builds the probe battery, validates everything up front, then runs all
//! probes concurrently on the current task and returns their results in
//! declaration order.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::ConfigError,
    probes::{Probe, ProbeResult, ProbeSpec},
    router::RouterClient,
    tiers::TierRegistry,
};

/// Runs a fixed battery of probes against one router
pub struct Orchestrator {
    client: RouterClient,
    probes: Vec<Box<dyn Probe>>,
}

impl Orchestrator {
    /// Create an orchestrator with the default probe battery
    pub fn new(config: &Config, registry: TierRegistry) -> Result<Self, ConfigError> {
        Self::with_specs(config, registry, ProbeSpec::default_battery())
    }

    /// Create an orchestrator with a custom probe battery
    ///
    /// Every configuration problem surfaces here, before any request is sent.
    pub fn with_specs(
        config: &Config,
        registry: TierRegistry,
        specs: Vec<ProbeSpec>,
    ) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::NoProbes);
        }

        registry.validate()?;
        let registry = Arc::new(registry);

        let probes = specs
            .into_iter()
            .map(|spec| spec.into_probe(Arc::clone(&registry)))
            .collect::<Result<Vec<_>, _>>()?;

        let client = RouterClient::new(config)?;

        debug!(
            base_url = %client.base_url(),
            probes = probes.len(),
            timeout_secs = client.timeout().as_secs(),
            "Orchestrator ready"
        );

        Ok(Self { client, probes })
    }

    /// Probe names in declaration order
    pub fn probe_names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Run every probe concurrently and collect results in declaration order
    ///
    /// Consumes the orchestrator so the HTTP connection pool is released as
    /// soon as the run completes.
    pub async fn run(self) -> Vec<ProbeResult> {
        info!(
            base_url = %self.client.base_url(),
            probes = self.probes.len(),
            "Starting router checks"
        );

        let client = &self.client;
        let mut pending: FuturesUnordered<_> = self
            .probes
            .iter()
            .enumerate()
            .map(|(index, probe)| async move {
                let started = Instant::now();
                let result = probe.execute(client).await;
                let elapsed_ms = started.elapsed().as_millis() as u64;

                if result.success {
                    info!(probe = %result.name, elapsed_ms, "Probe passed");
                } else {
                    warn!(
                        probe = %result.name,
                        elapsed_ms,
                        message = %result.message,
                        "Probe failed"
                    );
                }
                (index, result)
            })
            .collect();

        let mut completed = Vec::with_capacity(self.probes.len());
        while let Some(entry) = pending.next().await {
            completed.push(entry);
        }

        // Completion order is arbitrary; reports use declaration order
        completed.sort_by_key(|(index, _)| *index);
        completed.into_iter().map(|(_, result)| result).collect()
    }
}
