//! The editor orchestrator for Theme Studio
//!
//! Wires parameter edits to recompilation and re-rendering, and the
//! load-article action to the retrieve → sanitize → load chain.
//! Everything is single-threaded and event-driven: compilation and
//! sanitization are synchronous, and at most one asynchronous
//! operation (network retrieval, surface load) is in flight per user
//! action.
//!
//! There is no cancellation: a second load request does not abort one
//! already in flight, and the surface displays whichever completion
//! arrives last. An edit made while a load is in flight updates the
//! css text immediately; its effect on the surface is guaranteed once
//! the pending load completes and re-applies current state.

#![warn(missing_docs)]
#![warn(clippy::all)]

use thiserror::Error;

use preview::{PreviewRenderer, RenderSurface};
use retrieval::{FetchCapability, RetrievalError, RetrievalPipeline};
use stylesheet::CssText;
use theme_state::{ControlBinding, ParamValue, ThemeParameter, ThemeState};

/// Status text while a retrieval is in flight
pub const STATUS_FETCHING: &str = "Fetching article...";

/// Status text after a successful load
pub const STATUS_UPDATED: &str = "Preview updated.";

/// Errors reported by editor actions
#[derive(Debug, Error)]
pub enum EditorError {
    /// The load action was triggered with an empty URL
    #[error("Paste a full article URL first.")]
    EmptyUrl,

    /// Every retrieval strategy was exhausted
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    /// A control pushed a value of the wrong kind
    #[error(transparent)]
    State(#[from] theme_state::ThemeStateError),
}

/// Result type for editor actions
pub type Result<T> = std::result::Result<T, EditorError>;

/// The orchestrator: owns the theme state, the compiled output, and
/// the preview collaborators
pub struct ThemeEditor<F, S> {
    state: ThemeState,
    defaults: ThemeState,
    css_output: CssText,
    status: String,
    pipeline: RetrievalPipeline<F>,
    renderer: PreviewRenderer<S>,
}

impl<F: FetchCapability, S: RenderSurface> ThemeEditor<F, S> {
    /// Create an editor over a retrieval pipeline and a rendering
    /// surface, starting from the default theme
    pub fn new(pipeline: RetrievalPipeline<F>, renderer: PreviewRenderer<S>) -> Self {
        Self {
            state: ThemeState::default(),
            defaults: ThemeState::default(),
            css_output: CssText::new(),
            status: String::new(),
            pipeline,
            renderer,
        }
    }

    /// Current theme state (read-only; the editor is the only writer)
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Current status line
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Compiled stylesheet text
    pub fn css_output(&self) -> &str {
        &self.css_output
    }

    /// Style-tag-wrapped stylesheet for the clipboard boundary
    ///
    /// Copy success/failure handling is the collaborator's business;
    /// clipboard failures never touch theme or preview state.
    pub fn export_stylesheet(&self) -> String {
        stylesheet::wrap_style_tag(&self.css_output)
    }

    /// The renderer and its surface
    pub fn renderer(&self) -> &PreviewRenderer<S> {
        &self.renderer
    }

    /// The retrieval pipeline
    pub fn pipeline(&self) -> &RetrievalPipeline<F> {
        &self.pipeline
    }

    /// Current dark-mode flag
    pub fn is_dark(&self) -> bool {
        self.renderer.is_dark()
    }

    /// Handle one edit from a bound control
    ///
    /// Mutates the state, recompiles, and pushes the result into the
    /// preview without a reload.
    pub fn set_parameter(&mut self, param: ThemeParameter, value: ParamValue) -> Result<()> {
        self.state.set(param, value)?;
        self.recompile();
        Ok(())
    }

    /// Flip the light/dark mode; no reload, no recompilation
    pub fn toggle_mode(&mut self) {
        let next = !self.renderer.is_dark();
        self.renderer.apply_mode(next);
    }

    /// Set the light/dark mode explicitly
    pub fn set_mode(&mut self, is_dark: bool) {
        self.renderer.apply_mode(is_dark);
    }

    /// Reset every parameter to its default
    ///
    /// Recompiles (to the empty stylesheet), re-renders, and returns
    /// the value every bound control must now display.
    pub fn reset(&mut self) -> Vec<(ControlBinding, ParamValue)> {
        self.state.reset();
        self.recompile();
        theme_state::sync_values(&self.state)
    }

    /// Seed the preview with the placeholder document
    pub async fn seed_placeholder(&mut self, html: &str) {
        let document = sanitizer::sanitize(html, "about:blank");
        let css = self.css_output.clone();
        self.renderer.load(document, &css).await;
    }

    /// Load a remote article into the preview
    ///
    /// Validates the URL, retrieves through the fallback chain,
    /// sanitizes, and loads. On any failure the status carries the
    /// error's message verbatim and the surface is left untouched.
    pub async fn load_article(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            let err = EditorError::EmptyUrl;
            self.status = err.to_string();
            return Err(err);
        }

        self.status = STATUS_FETCHING.to_string();
        let html = match self.pipeline.retrieve(url).await {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!("Article load failed: {}", err);
                self.status = err.to_string();
                return Err(err.into());
            }
        };

        let document = sanitizer::sanitize(&html, url);
        let css = self.css_output.clone();
        self.renderer.load(document, &css).await;
        self.status = STATUS_UPDATED.to_string();
        Ok(())
    }

    fn recompile(&mut self) {
        self.css_output = stylesheet::compile(&self.state, &self.defaults);
        self.renderer.apply_stylesheet(&self.css_output);
    }
}
