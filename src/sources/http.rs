use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Settings shared by every outbound upstream call
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Client-identifying User-Agent (required by the code-host API)
    pub user_agent: String,
    /// Maximum accepted response body in bytes
    pub max_response_size: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Web2-Reputation-Gateway/1.0".to_string(),
            max_response_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Decoded reply from an upstream that answered at the HTTP level
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamReply<T> {
    /// 200 with a body that decoded into `T`
    Success(T),
    /// Any other status; the body is discarded
    Rejected(StatusCode),
}

impl<T> UpstreamReply<T> {
    pub fn success(self) -> Option<T> {
        match self {
            UpstreamReply::Success(value) => Some(value),
            UpstreamReply::Rejected(_) => None,
        }
    }
}

/// JSON HTTP client shared by all adapters.
///
/// `Err` means the call itself failed (transport error, timeout, oversized
/// or undecodable body); any status other than 200 is `Ok(Rejected)`.
/// Transport errors are stripped of their URL, which may carry an API key.
#[derive(Debug, Clone)]
pub struct UpstreamHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl UpstreamHttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create upstream HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    pub fn user_agent(&self) -> &str {
        &self.config.user_agent
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<UpstreamReply<T>> {
        debug!(url = %redact_query(&url), "GET upstream");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Request to {} failed", redact_query(&url)))?;

        self.decode(response).await
    }

    pub async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<UpstreamReply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url = %redact_query(&url), "POST upstream");

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Request to {} failed", redact_query(&url)))?;

        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<UpstreamReply<T>> {
        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = %status.as_u16(), "Upstream rejected request");
            return Ok(UpstreamReply::Rejected(status));
        }

        let content_length = response.content_length().unwrap_or(0);
        if content_length > self.config.max_response_size as u64 {
            return Err(anyhow::anyhow!(
                "Response too large: {} bytes (max: {})",
                content_length,
                self.config.max_response_size
            ));
        }

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read response body")?;

        if body.len() > self.config.max_response_size {
            return Err(anyhow::anyhow!(
                "Response body too large: {} bytes (max: {})",
                body.len(),
                self.config.max_response_size
            ));
        }

        let value = serde_json::from_str(&body).context("Failed to decode upstream JSON")?;
        Ok(UpstreamReply::Success(value))
    }
}

/// Render a URL for logs without its query string (may carry API keys)
pub fn redact_query(url: &Url) -> String {
    let mut shown = url.clone();
    if shown.query().is_some() {
        shown.set_query(Some("<redacted>"));
    }
    shown.to_string()
}
