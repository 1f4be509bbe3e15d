use super::HtmlFormat;
use crate::dom::NodeData;
use crate::formats::Format;
use crate::tree::DocumentTree;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Guide</title><style>h1 > a { color: red; }</style></head>
<body>
<!-- generated -->
<h1 id="intro" class="top">Intro &amp; Overview</h1>
<p>Some <em>inline</em> text.</p>
<h2>Usage</h2>
<img src="a.png" alt='A &lt;b&gt;'/>
<h2 data-x=raw>Details</h2>
</body>
</html>
"#;

#[test]
fn test_parse_elements_and_attributes() {
    let doc = HtmlFormat.parse_document(PAGE).unwrap();

    let tags: Vec<&str> = doc
        .elements()
        .into_iter()
        .map(|n| doc.tag_name(n))
        .collect();
    assert_eq!(
        tags,
        vec!["html", "head", "title", "style", "body", "h1", "p", "em", "h2", "img", "h2"]
    );

    let intro = doc.find_by_id("intro").unwrap();
    assert_eq!(doc.attr(intro, "class"), Some("top"));
    assert_eq!(DocumentTree::text(&doc, intro), "Intro & Overview");

    let img = doc.first_element("img").unwrap();
    assert_eq!(doc.attr(img, "alt"), Some("A <b>"));
    assert!(doc.children(img).is_empty());

    let details = doc
        .elements()
        .into_iter()
        .find(|&n| doc.attr(n, "data-x").is_some())
        .unwrap();
    assert_eq!(doc.attr(details, "data-x"), Some("raw"));
}

#[test]
fn test_inline_whitespace_is_preserved() {
    let doc = HtmlFormat.parse_document(PAGE).unwrap();
    let p = doc.first_element("p").unwrap();
    assert_eq!(DocumentTree::text(&doc, p), "Some inline text.");
}

#[test]
fn test_doctype_comment_and_raw_style() {
    let doc = HtmlFormat.parse_document(PAGE).unwrap();

    let root_kinds: Vec<&NodeData> = doc
        .children(doc.root())
        .iter()
        .map(|&n| doc.data(n))
        .collect();
    assert!(matches!(root_kinds[0], NodeData::Doctype(d) if d.eq_ignore_ascii_case("<!DOCTYPE html>")));

    let has_comment = doc
        .descendants()
        .into_iter()
        .any(|n| matches!(doc.data(n), NodeData::Comment(c) if c == " generated "));
    assert!(has_comment, "Comment body should be kept without delimiters");

    let style = doc.first_element("style").unwrap();
    assert_eq!(DocumentTree::text(&doc, style), "h1 > a { color: red; }");
}

#[test]
fn test_fragment_without_html_wrapper() {
    let doc = HtmlFormat.parse_document("<h1>One</h1><h2>Two</h2>").unwrap();
    let top: Vec<&str> = doc
        .children(doc.root())
        .iter()
        .map(|&n| doc.tag_name(n))
        .collect();
    assert_eq!(top, vec!["h1", "h2"]);
}
