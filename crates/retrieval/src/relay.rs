//! Cross-origin relay endpoints
//!
//! A relay re-serves a target URL's content from its own origin. The
//! default set is the fixed pair of public relays the editor has always
//! shipped with; hosts can swap the list through `RetrievalConfig`.

/// One relay endpoint and how it expects the target URL substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayEndpoint {
    prefix: String,
    strip_scheme: bool,
}

impl RelayEndpoint {
    /// Create a relay endpoint
    ///
    /// `strip_scheme` removes the target's `http(s)://` prefix before
    /// substitution, for relays that re-add their own.
    pub fn new(prefix: impl Into<String>, strip_scheme: bool) -> Self {
        Self {
            prefix: prefix.into(),
            strip_scheme,
        }
    }

    /// Relay prefix the target URL is appended to
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the relayed target for one URL
    pub fn target_for(&self, url: &str) -> String {
        let target = if self.strip_scheme {
            strip_scheme(url)
        } else {
            url
        };
        format!("{}{}", self.prefix, target)
    }
}

/// The fixed default relay pair
pub fn default_relays() -> Vec<RelayEndpoint> {
    vec![
        RelayEndpoint::new("https://r.jina.ai/https://", true),
        RelayEndpoint::new("https://cors.isomorphic-git.org/", false),
    ]
}

/// Remove a leading `http://` or `https://`, case-insensitively
fn strip_scheme(url: &str) -> &str {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") {
        &url["https://".len()..]
    } else if lower.starts_with("http://") {
        &url["http://".len()..]
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_with_scheme_stripped() {
        let relay = RelayEndpoint::new("https://r.jina.ai/https://", true);
        assert_eq!(
            relay.target_for("https://example.com/story"),
            "https://r.jina.ai/https://example.com/story"
        );
        assert_eq!(
            relay.target_for("HTTP://example.com"),
            "https://r.jina.ai/https://example.com"
        );
    }

    #[test]
    fn test_target_with_full_url() {
        let relay = RelayEndpoint::new("https://cors.isomorphic-git.org/", false);
        assert_eq!(
            relay.target_for("https://example.com/story"),
            "https://cors.isomorphic-git.org/https://example.com/story"
        );
    }

    #[test]
    fn test_strip_scheme_leaves_schemeless_urls_alone() {
        assert_eq!(strip_scheme("example.com/page"), "example.com/page");
        assert_eq!(strip_scheme("https://example.com"), "example.com");
        assert_eq!(strip_scheme("HtTpS://example.com"), "example.com");
    }

    #[test]
    fn test_default_relays_are_the_fixed_pair() {
        let relays = default_relays();
        assert_eq!(relays.len(), 2);
        assert_eq!(relays[0].prefix(), "https://r.jina.ai/https://");
        assert_eq!(relays[1].prefix(), "https://cors.isomorphic-git.org/");
    }
}
