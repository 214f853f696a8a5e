//! YouTube link normalization for embedded players.
//!
//! Accepts the common share formats (`youtu.be/<id>`, `watch?v=<id>`,
//! `/embed/<id>`) and rewrites them to the canonical embed URL. Anything else
//! is reported as `None` so the caller can show a fallback.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Best-effort conversion of a YouTube link into an embeddable URL.
pub fn embed_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;

    if url.host_str().is_some_and(|host| host.contains("youtu.be")) {
        let id = url.path().strip_prefix('/').unwrap_or(url.path()).trim();
        return (!id.is_empty()).then(|| format!("{EMBED_BASE}{id}"));
    }

    if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
        if !v.is_empty() {
            return Some(format!("{EMBED_BASE}{v}"));
        }
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let idx = segments.iter().position(|s| *s == "embed")?;
    segments.get(idx + 1).map(|id| format!("{EMBED_BASE}{id}"))
}
