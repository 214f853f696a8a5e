use super::*;

#[test]
fn library_lists_four_documents_in_order() {
    let titles: Vec<_> = POLICY_DOCS.iter().map(|d| d.title).collect();
    assert_eq!(
        titles,
        vec!["Safeguarding Policy", "Data Protection & Privacy", "Financial Management Policy", "Code of Conduct"]
    );
}

#[test]
fn published_documents_are_pdfs_under_policies() {
    let published: Vec<_> = POLICY_DOCS.iter().filter_map(|d| d.href).collect();
    assert_eq!(published.len(), 2);
    for href in published {
        assert!(href.starts_with("/policies/"), "{href}");
        assert!(href.ends_with(".pdf"), "{href}");
    }
}

#[test]
fn every_document_has_a_tag_and_description() {
    for doc in POLICY_DOCS {
        assert!(!doc.tag.is_empty(), "{}", doc.title);
        assert!(!doc.desc.is_empty(), "{}", doc.title);
    }
}
