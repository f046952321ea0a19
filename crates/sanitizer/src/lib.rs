//! Document sanitization for the embedded article preview
//!
//! Prepares remote HTML for safe loading into the isolated rendering
//! surface: executable content and preload hints are stripped, and
//! exactly one effective base-URL declaration is established so
//! relative asset paths keep resolving against the article's origin.
//!
//! Sanitization is total over any text input. The transforms are
//! regex-based and degrade to no-ops on malformed markup rather than
//! failing; there is no error type here.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::OnceLock;

use regex::Regex;

/// Sanitized document text, safe to load into the preview surface
///
/// Invariant: contains no `<script>` element content, no preload
/// `<link>` element, and exactly one effective base-URL declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Borrow the sanitized text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the sanitized text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy so adjacent scripts never merge into one match
    RE.get_or_init(|| Regex::new(r"(?is)<script.*?</script>").unwrap())
}

fn preload_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)<link[^>]+rel=["']preload["'][^>]*>"#).unwrap())
}

fn base_probe_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<base").unwrap())
}

fn base_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<base[^>]*>").unwrap())
}

fn head_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<head([^>]*)>").unwrap())
}

/// Sanitize a raw HTML document for embedding
///
/// Steps, in order: strip scripts, strip preload links, establish the
/// base URL. Exactly one of the three base-handling branches fires per
/// input: rewrite an existing `<base>`, insert into an existing
/// `<head>`, or synthesize a head wrapper.
pub fn sanitize(html: &str, base_url: &str) -> SafeHtml {
    let without_scripts = strip_scripts(html);
    let without_preloads = strip_preload_links(&without_scripts);
    SafeHtml(set_base_url(&without_preloads, base_url))
}

/// Remove every `<script>` element including its content
pub fn strip_scripts(html: &str) -> String {
    script_re().replace_all(html, "").into_owned()
}

/// Remove every `<link rel="preload">` element
pub fn strip_preload_links(html: &str) -> String {
    preload_re().replace_all(html, "").into_owned()
}

fn set_base_url(html: &str, base_url: &str) -> String {
    let base_tag = format!("<base href=\"{}\">", base_url);

    if base_probe_re().is_match(html) {
        // Rewrite the first existing base tag to declare only our href
        return base_tag_re()
            .replace(html, regex::NoExpand(base_tag.as_str()))
            .into_owned();
    }

    if head_open_re().is_match(html) {
        // First child of head, head's own attributes preserved
        return head_open_re()
            .replace(html, |caps: &regex::Captures<'_>| {
                format!("<head{}>{}", &caps[1], base_tag)
            })
            .into_owned();
    }

    format!("<head>{}</head>{}", base_tag, html)
}
