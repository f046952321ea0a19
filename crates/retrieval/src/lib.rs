//! Remote article retrieval for Theme Studio
//!
//! This crate fetches a user-supplied article URL through an ordered
//! fallback chain: the direct URL first, then each configured
//! cross-origin relay. The chain itself is the retry strategy; there
//! are no per-attempt retries.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fetch;
pub mod pipeline;
pub mod relay;
pub mod test_utils;

pub use fetch::{FetchCapability, FetchResponse, HttpFetch};
pub use pipeline::{Result, RetrievalConfig, RetrievalError, RetrievalPipeline};
pub use relay::{default_relays, RelayEndpoint};
