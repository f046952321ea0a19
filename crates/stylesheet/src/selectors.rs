//! The fixed selector contract against the fade-gallery article template
//!
//! These selectors are part of the template's public surface; the
//! compiler never emits a rule outside this set. Dark variants are
//! wrapped by one of two guards: a media guard that fires when the
//! system prefers dark and the preview mode is `auto`, and a forced
//! guard that fires when the mode attribute is `on`.

/// Caption pill inside the gallery caption bar
pub const CAPTION_SPAN: &str = ".fade-gallery .content .caption span:not(:empty)";

/// Gallery caption bar
pub const CAPTION: &str = ".fade-gallery .content .caption";

/// Article content root
pub const ARTICLE_ROOT: &str = ".fade-gallery .content";

/// Article title
pub const TITLE: &str = ".fade-gallery .content h1.entry-title";

/// Article subtitle
pub const SUBTITLE: &str = ".fade-gallery .content .entry-subtitle";

/// Inline highlight marks
pub const MARK: &str = ".fade-gallery .content mark";

/// Attribution block title
pub const ATTRIBUTION_TITLE: &str = ".fade-gallery .content .attribution .attribution-title";

/// Attribution block container
pub const ATTRIBUTION_BLOCK: &str = ".fade-gallery .content .attribution";

/// Attribute the renderer paints on the document root for mode switching
pub const MODE_ATTR: &str = "data-theme-mode";

/// Wrap dark declarations in the "system prefers dark AND mode=auto" guard
pub fn dark_auto_block(selector: &str, declarations: &str) -> String {
    format!(
        "@media (prefers-color-scheme: dark) {{ html[{}=\"auto\"] {} {{ {} }} }}",
        MODE_ATTR, selector, declarations
    )
}

/// Wrap dark declarations in the "mode=on" guard
pub fn dark_forced_block(selector: &str, declarations: &str) -> String {
    format!(
        "html[{}=\"on\"] {} {{ {} }}",
        MODE_ATTR, selector, declarations
    )
}
