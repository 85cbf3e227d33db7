//! Run reporting
//!
//! Pure projection of probe results into counts, a text report and a JSON
//! document. Nothing here performs I/O.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::probes::ProbeResult;

const RULE: &str = "==================================================";

/// Process exit code when every probe passed
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code when at least one probe failed
pub const EXIT_PROBE_FAILURE: u8 = 1;
/// Process exit code when the run could not start
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// Exit code for a run that either completed or failed during setup
pub fn exit_code<E>(outcome: &Result<RunSummary, E>) -> u8 {
    match outcome {
        Ok(summary) => summary.exit_code(),
        Err(_) => EXIT_CONFIG_ERROR,
    }
}

/// Aggregate outcome of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    /// Results in probe declaration order
    pub results: Vec<ProbeResult>,
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    /// Summarize results; order is preserved as given
    pub fn from_results(results: Vec<ProbeResult>) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        let total = results.len();

        Self {
            passed,
            failed: total - passed,
            total,
            results,
            generated_at: Utc::now(),
        }
    }

    /// True when nothing failed (vacuously true for an empty run)
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Exit code for this run
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            EXIT_SUCCESS
        } else {
            EXIT_PROBE_FAILURE
        }
    }

    /// Human-readable report, one line per probe plus a summary
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Router checks");
        let _ = writeln!(out, "{}", RULE);

        for result in &self.results {
            let marker = if result.success { "PASS" } else { "FAIL" };
            let _ = writeln!(out, "{} {}: {}", marker, result.name, result.message);
            if let Some(model) = &result.model_used {
                let _ = writeln!(out, "     Model: {}", model);
            }
        }

        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Summary:");
        let _ = writeln!(out, "  Passed: {}/{}", self.passed, self.total);
        let _ = writeln!(out, "  Failed: {}/{}", self.failed, self.total);
        let _ = writeln!(out);

        if self.all_passed() {
            let _ = writeln!(out, "All checks passed. Router is working correctly.");
        } else {
            let _ = writeln!(
                out,
                "{} check(s) failed. Please check router configuration.",
                self.failed
            );
        }

        out
    }

    /// Machine-readable report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_text())
    }
}
