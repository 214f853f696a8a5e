use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.site, SiteConfig::default());
    assert!(cfg.public_dir.ends_with("../public"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("SITE_API_BASE", "https://api.example.org/"),
        ("CONTACT_TIMEOUT_MS", "5000"),
        ("PUBLIC_DIR", "/srv/public"),
    ]))
    .unwrap();

    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site.api_base, "https://api.example.org");
    assert_eq!(cfg.site.request_timeout_ms, 5000);
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/public"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_API_BASE", ""), ("CONTACT_TIMEOUT_MS", " ")]))
        .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site, SiteConfig::default());
}

#[test]
fn malformed_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn malformed_bind_addr_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
}

#[test]
fn zero_or_garbage_timeout_errors() {
    for raw in ["0", "-5", "soon"] {
        let err = ServerConfig::from_lookup(lookup(&[("CONTACT_TIMEOUT_MS", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "CONTACT_TIMEOUT_MS", .. }), "{raw}");
    }
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1"), ("PORT", "3001")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3001");
}
