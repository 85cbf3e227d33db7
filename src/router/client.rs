//! Router API client
//!
//! HTTP client for the router under test. Every request is bounded by the
//! configured timeout; transport failures are mapped to [`ProbeError`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use tracing::{debug, instrument, warn};

use crate::{
    config::Config,
    error::{ConfigError, ProbeError, ProbeOutcome},
    router::models::{ChatCompletionRequest, ChatCompletionResponse, ChatExchange},
};

/// Path of the router's health endpoint
pub const HEALTH_PATH: &str = "/health";
/// Path of the router's chat completion endpoint
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Router API client
///
/// Owns the connection pool for a single run; dropping the client releases it.
pub struct RouterClient {
    client: reqwest::Client,
    base_url: Url,
    health_url: Url,
    chat_url: Url,
    authorization: HeaderValue,
    timeout: Duration,
}

impl RouterClient {
    /// Create a new router client from validated configuration
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let base_url = config.validate()?;
        let authorization = config.authorization_header()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            health_url: endpoint(&base_url, HEALTH_PATH)?,
            chat_url: endpoint(&base_url, CHAT_COMPLETIONS_PATH)?,
            base_url,
            authorization,
            timeout: config.timeout,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the health endpoint
    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    /// Full URL of the chat completion endpoint
    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET the health endpoint and return its status code
    ///
    /// A non-200 status is not an error here; the caller decides.
    #[instrument(skip(self))]
    pub async fn health(&self) -> ProbeOutcome<u16> {
        debug!(url = %self.health_url, "Checking router health");

        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        debug!(status = %status, "Router health response status");
        Ok(status.as_u16())
    }

    /// POST a chat completion and return the raw status and body
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> ProbeOutcome<ChatExchange> {
        debug!(url = %self.chat_url, "Sending chat completion to router");

        let response = self
            .client
            .post(self.chat_url.clone())
            .headers(self.auth_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        debug!(status = %status, "Router chat completion response status");

        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, self.timeout))?;

        Ok(ChatExchange {
            status: status.as_u16(),
            body,
        })
    }

    /// POST a chat completion and return the model that served it
    ///
    /// Fails on non-2xx statuses, non-JSON bodies, and bodies without a
    /// `model` field.
    pub async fn served_model(&self, request: &ChatCompletionRequest) -> ProbeOutcome<String> {
        let exchange = self.chat_completion(request).await?;

        if !(200..300).contains(&exchange.status) {
            warn!(status = exchange.status, body = %exchange.body, "Router request failed");
            return Err(ProbeError::Status {
                status: exchange.status,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&exchange.body)
            .map_err(|e| {
                warn!(error = %e, body = %exchange.body, "Failed to parse router response");
                ProbeError::MalformedResponse(e.to_string())
            })?;

        parsed.model.ok_or(ProbeError::MissingModel)
    }

    /// Headers for authenticated JSON requests
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers
    }
}

/// Append an endpoint path to the base URL, keeping any base path prefix
fn endpoint(base: &Url, path: &str) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ConfigError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(path.trim_start_matches('/').split('/'));
    Ok(url)
}
