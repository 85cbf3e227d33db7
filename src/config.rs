//! Configuration management for routecheck
//!
//! Configuration is loaded from environment variables once, at startup,
//! and passed explicitly into the orchestrator.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::HeaderValue;
use reqwest::Url;

use crate::error::ConfigError;

/// Credential sent when no key is configured and none is required
pub const DEFAULT_API_KEY: &str = "test";

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("unknown report format '{}'", other),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Router base URL (e.g., http://localhost:4000)
    pub base_url: String,
    /// Bearer credential for the router, if set
    pub api_key: Option<String>,
    /// Treat a missing credential as a fatal error
    pub require_api_key: bool,

    /// Per-probe wall-clock timeout
    pub timeout: Duration,

    /// Optional JSON file overriding the built-in tier registry
    pub tiers_file: Option<PathBuf>,
    /// How the report is printed
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            api_key: None,
            require_api_key: false,
            timeout: Duration::from_secs(30),
            tiers_file: None,
            report_format: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs: u64 = match lookup("ROUTECHECK_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("Invalid ROUTECHECK_TIMEOUT_SECONDS")?,
            None => defaults.timeout.as_secs(),
        };

        let report_format = match lookup("ROUTECHECK_REPORT_FORMAT") {
            Some(raw) => raw.parse::<ReportFormat>()
                .context("Invalid ROUTECHECK_REPORT_FORMAT")?,
            None => defaults.report_format,
        };

        let require_api_key = match lookup("ROUTECHECK_REQUIRE_KEY") {
            Some(raw) => parse_flag(&raw).context("Invalid ROUTECHECK_REQUIRE_KEY")?,
            None => defaults.require_api_key,
        };

        Ok(Self {
            base_url: lookup("LITELLM_URL").unwrap_or(defaults.base_url),
            api_key: lookup("LITELLM_MASTER_KEY").filter(|k| !k.is_empty()),
            require_api_key,
            timeout: Duration::from_secs(timeout_secs),
            tiers_file: lookup("ROUTECHECK_TIERS_FILE").map(PathBuf::from),
            report_format,
        })
    }

    /// Credential to send, falling back to [`DEFAULT_API_KEY`]
    pub fn credential(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
    }

    /// `Authorization` header value for the credential
    pub fn authorization_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&format!("Bearer {}", self.credential()))
            .map_err(|e| ConfigError::InvalidCredential(e.to_string()))
    }

    /// Check the configuration before any probe is built
    ///
    /// Returns the parsed base URL so callers never re-parse it.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "missing host".to_string(),
            });
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "query strings and fragments are not allowed".to_string(),
            });
        }

        if self.require_api_key && self.api_key.is_none() {
            return Err(ConfigError::MissingCredential);
        }
        self.authorization_header()?;
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(url)
    }
}

/// Parse a boolean environment value
fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
