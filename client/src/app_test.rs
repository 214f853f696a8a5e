use super::*;

#[test]
fn page_title_appends_foundation_name() {
    assert_eq!(page_title("Contact"), "Contact | Longhorn Foundation");
}

#[test]
fn blank_page_title_is_foundation_name() {
    assert_eq!(page_title(""), "Longhorn Foundation");
    assert_eq!(page_title("   "), "Longhorn Foundation");
}

#[test]
fn every_page_has_a_distinct_route_segment() {
    let mut segments: Vec<_> = SitePage::ALL.iter().map(|p| p.segment()).collect();
    segments.sort_unstable();
    segments.dedup();
    assert_eq!(segments.len(), SitePage::ALL.len());
}
