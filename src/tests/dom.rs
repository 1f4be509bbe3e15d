use super::{Document, NodeData};

#[test]
fn test_descendants_are_in_document_order() {
    let mut doc = Document::new();
    let body = doc.append_element(doc.root(), "body", &[]);
    let h1 = doc.append_element(body, "h1", &[]);
    let p = doc.append_element(body, "p", &[]);
    let em = doc.append_element(p, "em", &[]);
    let h2 = doc.append_element(body, "h2", &[]);

    let order = doc.descendants();
    assert_eq!(order, vec![doc.root(), body, h1, p, em, h2]);
}

#[test]
fn test_text_content_concatenates_nested_text() {
    let mut doc = Document::new();
    let h1 = doc.append_element(doc.root(), "h1", &[]);
    doc.append_text(h1, "Intro ");
    let em = doc.append_element(h1, "em", &[]);
    doc.append_text(em, "to");
    doc.append_text(h1, " Rust");

    assert_eq!(doc.text_content(h1), "Intro to Rust");
}

#[test]
fn test_set_text_replaces_children() {
    let mut doc = Document::new();
    let h1 = doc.append_element(doc.root(), "h1", &[]);
    let em = doc.append_element(h1, "em", &[]);
    doc.append_text(em, "old");

    doc.set_text(h1, "new");

    assert_eq!(doc.text_content(h1), "new");
    assert_eq!(doc.children(h1).len(), 1);
    assert_eq!(doc.parent(em), None, "Old child should be detached");
    assert!(!doc.descendants().contains(&em));
}

#[test]
fn test_attributes_are_case_insensitive_and_overwritten() {
    let mut doc = Document::new();
    let h1 = doc.append_element(doc.root(), "H1", &[("ID", "top")]);

    let element = doc.element_mut(h1).unwrap();
    assert_eq!(element.attr("id"), Some("top"));
    element.set_attr("id", "intro");
    element.set_attr("class", "lead");
    assert_eq!(element.attrs.len(), 2);
    assert_eq!(element.attr("Id"), Some("intro"));

    element.remove_attr("class");
    assert_eq!(element.attr("class"), None);
}

#[test]
fn test_insert_moves_node_to_position() {
    let mut doc = Document::new();
    let body = doc.append_element(doc.root(), "body", &[]);
    let first = doc.append_element(body, "p", &[]);
    let panel = doc.append_element(doc.root(), "div", &[]);

    doc.insert(body, 0, panel);

    assert_eq!(doc.children(body), &[panel, first]);
    assert_eq!(doc.parent(panel), Some(body));
    assert_eq!(doc.children(doc.root()), &[body]);
}

#[test]
fn test_first_element_skips_non_elements() {
    let mut doc = Document::new();
    let root = doc.root();
    let comment = doc.create(NodeData::Comment("body".to_string()));
    doc.append(root, comment);
    let html = doc.append_element(root, "html", &[]);
    let body = doc.append_element(html, "BODY", &[]);

    assert_eq!(doc.first_element("body"), Some(body));
    assert_eq!(doc.first_element("main"), None);
}
