use super::{escape_attr, node_to_html, to_html};
use crate::dom::Document;
use crate::formats::html::HtmlFormat;
use crate::formats::Format;
use crate::selector::Selector;
use crate::toc::TocBuilder;
use crate::tree::DocumentTree;

#[test]
fn test_round_trip_keeps_source_shape() {
    let source = "<!DOCTYPE html>\n<body>\n<h1 id=\"a\">Fish &amp; Chips</h1>\n<br>\n<script>if (a < b) {}</script>\n</body>\n";
    let doc = HtmlFormat.parse_document(source).unwrap();
    assert_eq!(to_html(&doc), source);
}

#[test]
fn test_named_entities_render_as_characters() {
    let doc = HtmlFormat.parse_document("<h1>Caf&eacute; &mdash; Menu</h1>").unwrap();
    assert_eq!(to_html(&doc), "<h1>Café — Menu</h1>");
}

#[test]
fn test_labels_are_escaped_not_injected() {
    let mut doc = Document::new();
    let body = doc.append_element(doc.root(), "body", &[]);
    doc.append_element(body, "div", &[("id", "toc")]);
    let h1 = doc.append_element(body, "h1", &[]);
    doc.append_text(h1, "<B>Bold</B> & Co");

    TocBuilder::default().add_toc_entry(&mut doc, &Selector::parse("h1").unwrap(), false);

    let panel = doc.find_by_id("toc").unwrap();
    assert_eq!(
        node_to_html(&doc, panel),
        "<div id=\"toc\"><div><a href=\"#toc_e1\" class=\"h1\">&lt;b&gt;bold&lt;/b&gt; &amp; co</a></div></div>"
    );
}

#[test]
fn test_empty_attributes_render_bare() {
    let mut doc = Document::new();
    doc.append_element(doc.root(), "div", &[("id", "toc"), ("hidden", "")]);
    assert_eq!(to_html(&doc), "<div id=\"toc\" hidden></div>");
}

#[test]
fn test_attribute_quotes_are_escaped() {
    assert_eq!(escape_attr("say \"hi\" & <go>"), "say &quot;hi&quot; &amp; &lt;go&gt;");
}
