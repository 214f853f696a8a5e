//! Site configuration shared by the SSR host and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `SiteConfig` from its environment and provides it as
//! Leptos context during rendering. The HTML shell mirrors the values into
//! `<meta>` tags so the browser bundle can rebuild the same config at
//! hydration time without reading any environment of its own.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Contact-intake base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
/// Upper bound on a single contact submission round trip.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

/// `<meta name=...>` carrying the contact-intake base URL.
pub const META_API_BASE: &str = "contact-api-base";
/// `<meta name=...>` carrying the request timeout in milliseconds.
pub const META_REQUEST_TIMEOUT: &str = "contact-timeout-ms";

/// Composition-time configuration injected into the component tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root URL of the external contact-intake service, without a trailing `/`.
    pub api_base: String,
    pub request_timeout_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS }
    }
}

impl SiteConfig {
    /// Build a config from raw values, falling back to defaults for blanks.
    pub fn new(api_base: &str, request_timeout_ms: u32) -> Self {
        Self { api_base: normalize_api_base(api_base), request_timeout_ms: request_timeout_ms.max(1) }
    }

    /// Rebuild the config from the `<meta>` tags written by the SSR shell.
    ///
    /// Missing or malformed tags fall back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let read_meta = |name: &str| {
            doc.query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        let api_base = read_meta(META_API_BASE).unwrap_or_default();
        let timeout = parse_timeout(read_meta(META_REQUEST_TIMEOUT).as_deref());
        Self::new(&api_base, timeout)
    }
}

/// Trim whitespace and trailing slashes; blank input yields the default base.
pub fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a millisecond timeout, ignoring zero and garbage.
pub fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}
