//! Format trait and implementations for the document types tocbar can read.
//!
//! Each format names the tree-sitter grammar it parses with and the file extensions it claims,
//! and turns a source string into a [`Document`].

use crate::dom::Document;
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use std::io;

pub mod html;
pub mod markdown;

/// A source format parsed with tree-sitter into a [`Document`].
pub trait Format {
    /// Grammar used to parse sources of this format.
    fn language(&self) -> tree_sitter::Language;

    /// Lower-case file extensions (without the dot) this format handles.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Parse `source` into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or parsing is aborted.
    fn parse_document(&self, source: &str) -> io::Result<Document>;
}

/// Run the tree-sitter parser for `format` over `source`.
///
/// # Errors
///
/// Returns an error if the grammar is incompatible with the linked tree-sitter runtime or the
/// parser gives up without producing a tree.
pub fn parse_tree<F: Format + ?Sized>(format: &F, source: &str) -> io::Result<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&format.language())
        .map_err(io::Error::other)?;
    parser
        .parse(source, None)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "tree-sitter parse failed"))
}

/// Every built-in format.
#[must_use]
pub fn all() -> Vec<Box<dyn Format>> {
    vec![Box::new(html::HtmlFormat), Box::new(markdown::MarkdownFormat)]
}

/// Decode the HTML5 named and numeric character references in `raw`.
///
/// A reference that does not resolve, or a bare `&`, is kept verbatim while the references
/// around it are still decoded.
#[must_use]
pub fn decode_entities(raw: &str) -> String {
    match unescape_with(raw, resolve_html5_entity) {
        Ok(text) => text.into_owned(),
        Err(_) => decode_each(raw),
    }
}

fn decode_each(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = reference_end(rest).and_then(|semi| {
            unescape_with(&rest[..=semi], resolve_html5_entity)
                .ok()
                .map(|text| (text.into_owned(), semi))
        });
        if let Some((text, semi)) = decoded {
            out.push_str(&text);
            rest = &rest[semi + 1..];
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset of the `;` closing the reference `rest` starts with.
fn reference_end(rest: &str) -> Option<usize> {
    let end = rest[1..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '#'))
        .map(|i| i + 1)?;
    rest[end..].starts_with(';').then_some(end)
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
