//! The injected fetch capability and its HTTP implementation
//!
//! The pipeline never talks to the network directly; it goes through
//! [`FetchCapability`] so tests can script the chain and hosts can
//! substitute their own transport.

use async_trait::async_trait;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one text fetch: status flag plus body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Whether the response carried a success status
    pub ok: bool,
    /// Response body as text
    pub body: String,
}

impl FetchResponse {
    /// Successful response with the given body
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            ok: true,
            body: body.into(),
        }
    }

    /// Non-success response (status failure), body preserved
    pub fn failure(body: impl Into<String>) -> Self {
        Self {
            ok: false,
            body: body.into(),
        }
    }
}

/// One capability: fetch a URL and read its body as text
///
/// May reject (connection failure, timeout); the pipeline treats a
/// rejection the same as a non-success status and moves on to the next
/// attempt. The timeout is the capability's own, not the pipeline's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchCapability: Send + Sync {
    /// Fetch `url` and return its status flag and body text
    async fn fetch_text(&self, url: &str) -> anyhow::Result<FetchResponse>;
}

/// `reqwest`-backed fetch capability
#[derive(Debug, Clone)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Create a fetch capability with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetch capability with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchCapability for HttpFetch {
    async fn fetch_text(&self, url: &str) -> anyhow::Result<FetchResponse> {
        let response = self.client.get(url).send().await?;
        let ok = response.status().is_success();
        let body = response.text().await?;
        Ok(FetchResponse { ok, body })
    }
}
