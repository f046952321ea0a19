//! The isolated rendering surface boundary
//!
//! A surface displays one document at a time, wholly separate from any
//! hosting document. `load` is the single suspension point in the
//! preview pipeline: it resolves only once the surface has finished
//! loading the new document, so callers can safely run the post-load
//! chain when it returns.

use async_trait::async_trait;

/// A sandboxed document container
#[async_trait]
pub trait RenderSurface: Send + Sync {
    /// Replace the displayed document wholesale; resolves at load
    /// completion
    async fn load(&mut self, html: String);

    /// Snapshot of the currently displayed document text
    fn snapshot(&self) -> String;

    /// Write a mutated snapshot back in place, without a reload
    fn apply(&mut self, html: String);
}

/// In-memory surface for headless hosts and tests
///
/// Load completion is immediate: there is no real layout pass, the
/// document text simply becomes the current snapshot.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSurface {
    document: String,
}

impl EmbeddedSurface {
    /// Empty surface
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RenderSurface for EmbeddedSurface {
    async fn load(&mut self, html: String) {
        self.document = html;
    }

    fn snapshot(&self) -> String {
        self.document.clone()
    }

    fn apply(&mut self, html: String) {
        self.document = html;
    }
}
