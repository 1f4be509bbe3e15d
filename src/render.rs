//! Serialise a [`Document`] back to HTML.

use crate::dom::{Document, NodeData, NodeId};
use quick_xml::escape::{escape, partial_escape};
use std::borrow::Cow;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Escape `&`, `<` and `>` for use in element content.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    partial_escape(text)
}

/// Escape text for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value)
}

/// Render the whole document.
#[must_use]
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(doc.root()) {
        write_node(doc, child, false, &mut out);
    }
    out
}

/// Render `node` and its subtree.
#[must_use]
pub fn node_to_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, false, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, raw: bool, out: &mut String) {
    match doc.data(node) {
        NodeData::Document => {
            for &child in doc.children(node) {
                write_node(doc, child, false, out);
            }
        }
        NodeData::Doctype(raw_doctype) => out.push_str(raw_doctype),
        NodeData::Text(text) if raw => out.push_str(text),
        NodeData::Text(text) => out.push_str(&escape_text(text)),
        NodeData::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
        NodeData::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');

            let tag = element.tag.to_ascii_lowercase();
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            let raw_children = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
            for &child in doc.children(node) {
                write_node(doc, child, raw_children, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
