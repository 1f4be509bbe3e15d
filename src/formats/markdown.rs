//! Markdown format implementation using tree-sitter-md.
//!
//! Headings (ATX `#` and setext underlined) become `h1`..`h6` elements so that the usual
//! `"h1, h2"` selectors apply. Fenced code becomes `pre`, thematic breaks `hr`, and every other
//! block a `p` holding its source text. The blocks sit inside `html > body`.

use crate::dom::{Document, NodeId};
use crate::formats::{parse_tree, Format};
use std::io;
use tree_sitter::Node;

/// Tree-sitter backed Markdown reader.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["md", "markdown"]
    }

    fn parse_document(&self, source: &str) -> io::Result<Document> {
        let tree = parse_tree(self, source)?;
        let mut doc = Document::new();
        let html = doc.append_element(doc.root(), "html", &[]);
        let body = doc.append_element(html, "body", &[]);
        blocks(&mut doc, body, tree.root_node(), source);
        Ok(doc)
    }
}

fn text_of<'s>(node: Node, source: &'s str) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

fn heading_level(marker: &str) -> Option<usize> {
    match marker {
        "atx_h1_marker" | "setext_h1_underline" => Some(1),
        "atx_h2_marker" | "setext_h2_underline" => Some(2),
        "atx_h3_marker" => Some(3),
        "atx_h4_marker" => Some(4),
        "atx_h5_marker" => Some(5),
        "atx_h6_marker" => Some(6),
        _ => None,
    }
}

fn blocks(doc: &mut Document, body: NodeId, node: Node, source: &str) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "section" => blocks(doc, body, child, source),
            "atx_heading" | "setext_heading" => heading(doc, body, child, source),
            "fenced_code_block" => {
                let mut inner = child.walk();
                let code = child
                    .children(&mut inner)
                    .find(|c| c.kind() == "code_fence_content")
                    .map_or("", |c| text_of(c, source));
                let pre = doc.append_element(body, "pre", &[]);
                if !code.is_empty() {
                    doc.append_text(pre, code);
                }
            }
            "thematic_break" => {
                doc.append_element(body, "hr", &[]);
            }
            _ if child.is_named() => {
                let text = text_of(child, source).trim();
                if !text.is_empty() {
                    let p = doc.append_element(body, "p", &[]);
                    doc.append_text(p, text);
                }
            }
            _ => {}
        }
    }
}

/// Drop an ATX closing sequence: a trailing run of `#` that is the whole title or follows
/// whitespace. `C#` keeps its hash.
fn strip_closing_sequence(title: &str) -> &str {
    let without = title.trim_end_matches('#');
    if without.is_empty() {
        return without;
    }
    if without.len() < title.len() && without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        title
    }
}

fn heading(doc: &mut Document, body: NodeId, node: Node, source: &str) {
    let mut level = None;
    let mut title = "";
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = heading_level(child.kind()) {
            level = Some(found);
        } else if matches!(child.kind(), "inline" | "paragraph") {
            title = text_of(child, source).trim();
        }
    }
    if node.kind() == "atx_heading" {
        title = strip_closing_sequence(title);
    }
    let Some(level) = level else {
        return;
    };
    let h = doc.append_element(body, &format!("h{level}"), &[]);
    if !title.is_empty() {
        doc.append_text(h, title);
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
