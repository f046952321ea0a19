//! The preview renderer
//!
//! Owns a single isolated surface. On every load completion it runs
//! the post-load chain in fixed order: stylesheet, mode attribute,
//! media hydration, preload stripping. Hydration runs after styling so
//! newly revealed images are never briefly unstyled; the preload strip
//! is idempotent but kept last for clarity.

use sanitizer::SafeHtml;

use crate::surface::RenderSurface;
use crate::transform;

/// Renderer over one isolated surface
#[derive(Debug)]
pub struct PreviewRenderer<S> {
    surface: S,
    dark: bool,
}

impl<S: RenderSurface> PreviewRenderer<S> {
    /// Wrap a surface; mode starts light
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            dark: false,
        }
    }

    /// The owned surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current dark-mode flag
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Load a sanitized document and run the post-load chain
    ///
    /// Suspends until the surface reports load completion; the chain
    /// runs strictly after that, never before.
    pub async fn load(&mut self, document: SafeHtml, css: &str) {
        self.surface.load(document.into_inner()).await;
        tracing::debug!("Preview document loaded, running post-load chain");
        self.apply_stylesheet(css);
        self.apply_mode(self.dark);
        self.hydrate_media();
        self.strip_preload_links();
    }

    /// Create/update/remove the injected style element; idempotent
    pub fn apply_stylesheet(&mut self, css: &str) {
        let next = transform::apply_stylesheet(&self.surface.snapshot(), css);
        self.surface.apply(next);
    }

    /// Paint the mode attribute on the document root
    pub fn apply_mode(&mut self, is_dark: bool) {
        self.dark = is_dark;
        let next = transform::apply_mode(&self.surface.snapshot(), is_dark);
        self.surface.apply(next);
    }

    /// Reveal deferred media so it renders inside the sandbox
    pub fn hydrate_media(&mut self) {
        let next = transform::hydrate_media(&self.surface.snapshot());
        self.surface.apply(next);
    }

    /// Defensive second pass for documents that bypassed sanitization
    pub fn strip_preload_links(&mut self) {
        let next = transform::strip_preload_links(&self.surface.snapshot());
        self.surface.apply(next);
    }
}
