//! Test utilities for scripting the retrieval chain
//!
//! `ScriptedFetch` plays back a fixed sequence of responses and records
//! every URL it was asked for. It lives outside `#[cfg(test)]` so
//! downstream crates and workspace integration tests can drive the
//! pipeline without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::fetch::{FetchCapability, FetchResponse};

/// A fetch capability that replays a scripted response sequence
#[derive(Debug, Default)]
pub struct ScriptedFetch {
    responses: Mutex<VecDeque<anyhow::Result<FetchResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetch {
    /// Empty script; every fetch rejects
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response with the given body
    pub fn push_success(self, body: impl Into<String>) -> Self {
        self.push(Ok(FetchResponse::success(body)))
    }

    /// Queue a non-success status response
    pub fn push_failure(self, body: impl Into<String>) -> Self {
        self.push(Ok(FetchResponse::failure(body)))
    }

    /// Queue a rejected fetch
    pub fn push_error(self, message: impl Into<String>) -> Self {
        self.push(Err(anyhow::anyhow!(message.into())))
    }

    fn push(self, response: anyhow::Result<FetchResponse>) -> Self {
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .push_back(response);
        self
    }

    /// URLs fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("scripted calls poisoned").clone()
    }
}

#[async_trait]
impl FetchCapability for ScriptedFetch {
    async fn fetch_text(&self, url: &str) -> anyhow::Result<FetchResponse> {
        self.calls
            .lock()
            .expect("scripted calls poisoned")
            .push(url.to_string());
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("script exhausted")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_fetch_replays_in_order() {
        let fetch = ScriptedFetch::new()
            .push_error("down")
            .push_success("<html></html>");

        let first = fetch.fetch_text("https://a.test").await;
        assert!(first.is_err());
        let second = fetch.fetch_text("https://b.test").await.unwrap();
        assert!(second.ok);

        assert_eq!(fetch.calls(), vec!["https://a.test", "https://b.test"]);
    }

    #[tokio::test]
    async fn test_exhausted_script_rejects() {
        let fetch = ScriptedFetch::new();
        assert!(fetch.fetch_text("https://a.test").await.is_err());
    }
}
