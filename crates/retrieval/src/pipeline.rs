//! The ordered fallback retrieval pipeline
//!
//! Attempts are tried strictly in order, most-trusted source first:
//! the direct URL, then each configured relay. The first success whose
//! body passes the cheap `<html` plausibility check wins; everything
//! else (rejection, non-success status, implausible body) moves the
//! chain along. Exhaustion fails with a fixed user-facing message,
//! never a raw network error.

use thiserror::Error;

use crate::fetch::FetchCapability;
use crate::relay::{default_relays, RelayEndpoint};

/// Errors produced by the retrieval pipeline
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Every strategy errored or returned an implausible body
    #[error("Unable to fetch the article (CORS blocked?)")]
    Exhausted,
}

/// Result type for retrieval operations
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Pipeline configuration: the relay list is configuration, not code
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Relays tried after the direct fetch, in order
    pub relays: Vec<RelayEndpoint>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            relays: default_relays(),
        }
    }
}

impl RetrievalConfig {
    /// Default configuration (the fixed public relay pair)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the relay list
    pub fn with_relays(mut self, relays: Vec<RelayEndpoint>) -> Self {
        self.relays = relays;
        self
    }
}

/// Fallback-chain retrieval over an injected fetch capability
#[derive(Debug)]
pub struct RetrievalPipeline<F> {
    fetch: F,
    config: RetrievalConfig,
}

impl<F: FetchCapability> RetrievalPipeline<F> {
    /// Create a pipeline with the default relay configuration
    pub fn new(fetch: F) -> Self {
        Self::with_config(fetch, RetrievalConfig::default())
    }

    /// Create a pipeline with a custom configuration
    pub fn with_config(fetch: F, config: RetrievalConfig) -> Self {
        Self { fetch, config }
    }

    /// The underlying fetch capability
    pub fn fetch(&self) -> &F {
        &self.fetch
    }

    /// The ordered attempt targets for one URL
    pub fn attempts(&self, url: &str) -> Vec<String> {
        let mut targets = vec![url.to_string()];
        targets.extend(self.config.relays.iter().map(|relay| relay.target_for(url)));
        targets
    }

    /// Retrieve raw article HTML for a URL
    ///
    /// Constructed fresh per call and discarded after the first
    /// accepted body or the exhaustion of the list.
    pub async fn retrieve(&self, url: &str) -> Result<String> {
        for target in self.attempts(url) {
            match self.fetch.fetch_text(&target).await {
                Ok(response) if response.ok => {
                    if plausible_html(&response.body) {
                        tracing::debug!("Fetched article via {}", target);
                        return Ok(response.body);
                    }
                    tracing::debug!("Implausible body from {}, trying next source", target);
                }
                Ok(_) => {
                    tracing::debug!("Non-success status from {}, trying next source", target);
                }
                Err(err) => {
                    tracing::debug!("Fetch failed for {}: {}", target, err);
                }
            }
        }
        tracing::warn!("All retrieval strategies exhausted for {}", url);
        Err(RetrievalError::Exhausted)
    }
}

/// Cheap plausibility check against relays returning error pages or JSON
fn plausible_html(body: &str) -> bool {
    body.to_ascii_lowercase().contains("<html")
}
