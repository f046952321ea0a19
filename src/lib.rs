//! Theme Studio
//!
//! A live theme editor: sliders, toggles, and color wells drive a
//! stylesheet compiler whose output is injected into a sandboxed
//! preview of a remote article. This facade re-exports the pieces a
//! hosting shell needs to wire up.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use editor_core::{EditorError, ThemeEditor, STATUS_FETCHING, STATUS_UPDATED};
pub use preview::{EmbeddedSurface, PreviewRenderer, RenderSurface};
pub use retrieval::{FetchCapability, HttpFetch, RetrievalConfig, RetrievalPipeline};
pub use sanitizer::{sanitize, SafeHtml};
pub use stylesheet::{compile, wrap_style_tag};
pub use theme_state::{
    standard_bindings, ControlBinding, ControlKind, ParamValue, ThemeParameter, ThemeState,
};

/// Install the global tracing subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}
