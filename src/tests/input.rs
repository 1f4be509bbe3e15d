use super::{format_for, load_document};
use crate::tree::DocumentTree;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::Builder;

fn extensions() -> Vec<String> {
    vec!["html".to_string(), "md".to_string()]
}

#[test]
fn test_format_chosen_by_extension() {
    assert!(format_for(Path::new("page.HTML")).is_some());
    assert!(format_for(Path::new("notes.md")).is_some());
    assert!(format_for(Path::new("data.json")).is_none());
    assert!(format_for(Path::new("README")).is_none());
}

#[test]
fn test_load_html_file() {
    let mut file = Builder::new().suffix(".html").tempfile().unwrap();
    write!(file, "<h1>Hello</h1>").unwrap();

    let doc = load_document(file.path(), &extensions()).unwrap();
    let h1 = doc.first_element("h1").unwrap();
    assert_eq!(DocumentTree::text(&doc, h1), "Hello");
}

#[test]
fn test_load_markdown_file() {
    let mut file = Builder::new().suffix(".md").tempfile().unwrap();
    writeln!(file, "# Title\n\n## Part").unwrap();

    let doc = load_document(file.path(), &extensions()).unwrap();
    assert!(doc.first_element("h2").is_some());
}

#[test]
fn test_disabled_extension_is_rejected() {
    let file = Builder::new().suffix(".htm").tempfile().unwrap();
    let err = load_document(file.path(), &extensions()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_enabled_but_unknown_extension_is_rejected() {
    let file = Builder::new().suffix(".txt").tempfile().unwrap();
    let err = load_document(file.path(), &["txt".to_string()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
