//! Error types for routecheck
//!
//! Two families of errors exist:
//! - [`ProbeError`] - anything that can go wrong during a single probe's
//!   exchange with the router. These never escape a probe; they are folded
//!   into a failed [`ProbeResult`](crate::probes::ProbeResult).
//! - [`ConfigError`] - fatal setup problems detected before any network
//!   activity begins.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of a single request/response exchange with the router
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Cannot connect to router: {0}")]
    Connect(String),

    #[error("Request timed out after {}s", .after.as_secs_f64())]
    Timeout { after: Duration },

    #[error("Router returned status {status}")]
    Status { status: u16 },

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    #[error("Response is missing the `model` field")]
    MissingModel,

    #[error("HTTP client error: {0}")]
    Http(reqwest::Error),
}

impl ProbeError {
    /// Classify a transport error from reqwest
    ///
    /// `timeout` is the configured client timeout, reported back in the
    /// message so the user can tell which limit was hit.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout { after: timeout }
        } else if err.is_connect() {
            ProbeError::Connect(err.to_string())
        } else if err.is_decode() {
            ProbeError::MalformedResponse(err.to_string())
        } else {
            ProbeError::Http(err)
        }
    }
}

/// Fatal configuration errors, raised before any probe executes
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid router base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("LITELLM_MASTER_KEY is required but not set")]
    MissingCredential,

    #[error("Credential cannot be sent as an Authorization header: {0}")]
    InvalidCredential(String),

    #[error("Probe timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Invalid tier registry: {0}")]
    InvalidRegistry(String),

    #[error("Failed to load tier registry from {path}: {reason}")]
    RegistryFile { path: PathBuf, reason: String },

    #[error("Invalid probe '{name}': {reason}")]
    InvalidProbe { name: String, reason: String },

    #[error("No probes configured")]
    NoProbes,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for router exchanges
pub type ProbeOutcome<T> = Result<T, ProbeError>;
