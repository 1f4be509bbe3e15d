//! HTML format implementation using tree-sitter-html.
//!
//! Elements, attributes, comments and the doctype map onto [`Document`] nodes. Character data
//! is taken from the raw source between child nodes rather than from tree-sitter's `text`
//! tokens, so whitespace around inline markup survives a parse and render round trip.

use crate::dom::{Document, Element, NodeData, NodeId};
use crate::formats::{decode_entities, parse_tree, Format};
use std::io;
use tree_sitter::Node;

/// Tree-sitter backed HTML reader.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_html::LANGUAGE.into()
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["html", "htm", "xhtml"]
    }

    fn parse_document(&self, source: &str) -> io::Result<Document> {
        let tree = parse_tree(self, source)?;
        let mut doc = Document::new();
        let root = doc.root();
        let mut reader = Reader {
            source,
            doc: &mut doc,
        };
        reader.children(tree.root_node(), root, 0, source.len());
        Ok(doc)
    }
}

struct Reader<'a> {
    source: &'a str,
    doc: &'a mut Document,
}

impl<'a> Reader<'a> {
    fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }

    fn node_text(&self, node: Node) -> &'a str {
        self.slice(node.start_byte(), node.end_byte())
    }

    fn push_text(&mut self, parent: NodeId, start: usize, end: usize) {
        let raw = self.slice(start, end);
        if !raw.is_empty() {
            let text = decode_entities(raw);
            self.doc.append_text(parent, &text);
        }
    }

    /// Add the structural children of `node` under `parent`, turning the source between them
    /// (within `start..end`) into text nodes.
    fn children(&mut self, node: Node, parent: NodeId, start: usize, end: usize) {
        let mut pos = start;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "element" | "script_element" | "style_element" | "comment" | "doctype"
                | "erroneous_end_tag" => {
                    self.push_text(parent, pos, child.start_byte());
                    pos = pos.max(child.end_byte());
                    self.node(child, parent);
                }
                _ => {}
            }
        }
        self.push_text(parent, pos, end);
    }

    fn node(&mut self, node: Node, parent: NodeId) {
        match node.kind() {
            "element" => self.element(node, parent, false),
            "script_element" | "style_element" => self.element(node, parent, true),
            "comment" => {
                let raw = self.node_text(node);
                let body = raw
                    .strip_prefix("<!--")
                    .map_or(raw, |s| s.strip_suffix("-->").unwrap_or(s))
                    .to_string();
                let id = self.doc.create(NodeData::Comment(body));
                self.doc.append(parent, id);
            }
            "doctype" => {
                let raw = self.node_text(node).to_string();
                let id = self.doc.create(NodeData::Doctype(raw));
                self.doc.append(parent, id);
            }
            // Stray end tags carry no content.
            _ => {}
        }
    }

    fn element(&mut self, node: Node, parent: NodeId, raw_text: bool) {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        let Some(open) = children
            .iter()
            .find(|c| matches!(c.kind(), "start_tag" | "self_closing_tag"))
        else {
            return;
        };

        let element = self.tag(*open);
        let id = self.doc.create(NodeData::Element(element));
        self.doc.append(parent, id);

        if open.kind() == "self_closing_tag" {
            return;
        }

        let content_end = children
            .iter()
            .find(|c| c.kind() == "end_tag")
            .map_or(node.end_byte(), Node::start_byte);

        if raw_text {
            let raw = self.slice(open.end_byte(), content_end).to_string();
            if !raw.is_empty() {
                self.doc.append_text(id, &raw);
            }
        } else {
            self.children(node, id, open.end_byte(), content_end);
        }
    }

    fn tag(&self, open: Node) -> Element {
        let mut tag = String::new();
        let mut attrs = Vec::new();
        let mut cursor = open.walk();
        for child in open.children(&mut cursor) {
            match child.kind() {
                "tag_name" => tag = self.node_text(child).to_string(),
                "attribute" => attrs.push(self.attribute(child)),
                _ => {}
            }
        }
        Element { tag, attrs }
    }

    fn attribute(&self, attribute: Node) -> (String, String) {
        let mut name = String::new();
        let mut value = String::new();
        let mut cursor = attribute.walk();
        for child in attribute.children(&mut cursor) {
            match child.kind() {
                "attribute_name" => name = self.node_text(child).to_string(),
                "attribute_value" => value = decode_entities(self.node_text(child)),
                "quoted_attribute_value" => {
                    let quoted = self.node_text(child);
                    let inner = quoted.get(1..quoted.len().saturating_sub(1)).unwrap_or("");
                    value = decode_entities(inner);
                }
                _ => {}
            }
        }
        (name, value)
    }
}

#[cfg(test)]
#[path = "../tests/html.rs"]
mod tests;
