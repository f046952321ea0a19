//! By-value document snapshot transforms
//!
//! Pure text transforms the renderer applies to surface snapshots.
//! They operate on whatever markup they are given and degrade to
//! no-ops when the expected structure is missing.

use std::sync::OnceLock;

use regex::Regex;

pub use sanitizer::strip_preload_links;

/// Well-known id of the injected theme style element
pub const STYLE_ELEMENT_ID: &str = "theme-editor-style";

/// Id of the mode-specific style element a prior design injected;
/// removed on sight for compatibility
pub const LEGACY_MODE_STYLE_ID: &str = "theme-editor-mode-style";

fn style_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<style id="theme-editor-style">.*?</style>"#).unwrap()
    })
}

fn legacy_mode_style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<style id="theme-editor-mode-style">.*?</style>"#).unwrap()
    })
}

fn html_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<html([^>]*)>").unwrap())
}

fn mode_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"data-theme-mode="[^"]*""#).unwrap())
}

fn img_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap())
}

fn source_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<source\b[^>]*>").unwrap())
}

fn data_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\sdata-src\s*=\s*["']([^"']*)["']"#).unwrap())
}

fn live_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Leading whitespace keeps this from matching data-src
    RE.get_or_init(|| Regex::new(r#"(?i)\ssrc\s*=\s*["']"#).unwrap())
}

fn data_srcset_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\sdata-srcset\s*=\s*["']([^"']*)["']"#).unwrap())
}

fn live_srcset_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\ssrcset\s*=\s*["']"#).unwrap())
}

fn lazy_loading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\sloading\s*=\s*["']lazy["']"#).unwrap())
}

/// Create, update, or remove the injected theme style element
///
/// Idempotent. Non-empty css lands in a `<style id="theme-editor-style">`
/// element at the end of the head; empty css removes the element. A
/// document without a head is left untouched.
pub fn apply_stylesheet(html: &str, css: &str) -> String {
    let css = css.trim();

    if css.is_empty() {
        return style_block_re().replace(html, "").into_owned();
    }

    let element = format!("<style id=\"{}\">{}</style>", STYLE_ELEMENT_ID, css);

    if style_block_re().is_match(html) {
        return style_block_re()
            .replace(html, regex::NoExpand(element.as_str()))
            .into_owned();
    }

    match find_ci(html, "</head>") {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + element.len());
            out.push_str(&html[..pos]);
            out.push_str(&element);
            out.push_str(&html[pos..]);
            out
        }
        None => html.to_string(),
    }
}

/// Paint the light/dark mode attribute on the document root
///
/// Sets `data-theme-mode` to `"on"` or `"off"` on the `<html>` element
/// and removes the legacy mode-specific style element if one survived
/// from a prior design. A document without an `<html>` tag only gets
/// the legacy cleanup.
pub fn apply_mode(html: &str, is_dark: bool) -> String {
    let value = if is_dark { "on" } else { "off" };
    let cleaned = legacy_mode_style_re().replace_all(html, "").into_owned();

    if !html_open_re().is_match(&cleaned) {
        return cleaned;
    }

    html_open_re()
        .replace(&cleaned, |caps: &regex::Captures<'_>| {
            let attrs = &caps[1];
            if mode_attr_re().is_match(attrs) {
                let updated = mode_attr_re()
                    .replace(attrs, format!("data-theme-mode=\"{}\"", value).as_str())
                    .into_owned();
                format!("<html{}>", updated)
            } else {
                format!("<html{} data-theme-mode=\"{}\">", attrs, value)
            }
        })
        .into_owned()
}

/// Copy deferred media attributes into their live counterparts
///
/// `data-src` feeds `src` and `data-srcset` feeds `srcset` on image
/// elements; `data-srcset` feeds `srcset` on source elements. A live
/// attribute already present always wins. Explicit `loading="lazy"`
/// hints are stripped so media renders immediately inside the sandbox,
/// where scroll-based triggers do not fire reliably.
pub fn hydrate_media(html: &str) -> String {
    let hydrated = img_tag_re()
        .replace_all(html, |caps: &regex::Captures<'_>| {
            hydrate_tag(&caps[0], true)
        })
        .into_owned();
    source_tag_re()
        .replace_all(&hydrated, |caps: &regex::Captures<'_>| {
            hydrate_tag(&caps[0], false)
        })
        .into_owned()
}

fn hydrate_tag(tag: &str, primary_source: bool) -> String {
    let mut tag = tag.to_string();

    if primary_source {
        if let Some(caps) = data_src_re().captures(&tag) {
            if !live_src_re().is_match(&tag) {
                let value = caps[1].to_string();
                tag = with_attr(&tag, "src", &value);
            }
        }
    }

    if let Some(caps) = data_srcset_re().captures(&tag) {
        if !live_srcset_re().is_match(&tag) {
            let value = caps[1].to_string();
            tag = with_attr(&tag, "srcset", &value);
        }
    }

    lazy_loading_re().replace(&tag, "").into_owned()
}

fn with_attr(tag: &str, name: &str, value: &str) -> String {
    let attr = format!(" {}=\"{}\"", name, value);
    if let Some(stripped) = tag.strip_suffix("/>") {
        format!("{}{} />", stripped.trim_end(), attr)
    } else if let Some(stripped) = tag.strip_suffix('>') {
        format!("{}{}>", stripped, attr)
    } else {
        tag.to_string()
    }
}

fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    // Byte positions survive the lowercase round trip for ASCII needles
    haystack.to_ascii_lowercase().find(needle)
}
