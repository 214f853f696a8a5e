use super::*;

#[test]
fn default_points_at_local_development_endpoint() {
    let config = SiteConfig::default();
    assert_eq!(config.api_base, "http://localhost:5000");
    assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn normalize_api_base_trims_trailing_slashes() {
    assert_eq!(normalize_api_base("https://api.example.org/"), "https://api.example.org");
    assert_eq!(normalize_api_base("  https://api.example.org//  "), "https://api.example.org");
}

#[test]
fn normalize_api_base_blank_falls_back_to_default() {
    assert_eq!(normalize_api_base(""), DEFAULT_API_BASE);
    assert_eq!(normalize_api_base("   "), DEFAULT_API_BASE);
    assert_eq!(normalize_api_base("/"), DEFAULT_API_BASE);
}

#[test]
fn new_normalizes_base_and_clamps_timeout() {
    let config = SiteConfig::new("https://intake.example.org/", 0);
    assert_eq!(config.api_base, "https://intake.example.org");
    assert_eq!(config.request_timeout_ms, 1);
}

#[test]
fn parse_timeout_accepts_positive_integers_only() {
    assert_eq!(parse_timeout(Some("2500")), 2500);
    assert_eq!(parse_timeout(Some(" 800 ")), 800);
    assert_eq!(parse_timeout(Some("0")), DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(parse_timeout(Some("soon")), DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(parse_timeout(None), DEFAULT_REQUEST_TIMEOUT_MS);
}
