//! The traversal capability the builder and the visibility controller are written against.
//!
//! Anything that can list its elements in document order and read and write a handful of
//! element properties can host a TOC. [`Document`] is the implementation used by the CLI and
//! the tests.

use crate::dom::{Document, NodeData, NodeId};
use std::fmt::Debug;

/// Read and mutate element nodes of a document-like tree.
pub trait DocumentTree {
    /// Handle to an element node.
    type Node: Copy + Eq + Debug;

    /// Every element node in document order.
    fn elements(&self) -> Vec<Self::Node>;

    /// Parent element of `node`, `None` at the top of the tree.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Tag name as stored in the tree.
    fn tag_name(&self, node: Self::Node) -> &str;

    /// Value of attribute `name`.
    fn attr(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Set attribute `name` to `value`.
    fn set_attr(&mut self, node: Self::Node, name: &str, value: &str);

    /// Visible text of `node` and its descendants.
    fn text(&self, node: Self::Node) -> String;

    /// Replace the content of `node` with `text`.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Whether `node` is currently shown.
    fn is_visible(&self, node: Self::Node) -> bool;

    /// Show or hide `node`.
    fn set_visible(&mut self, node: Self::Node, visible: bool);

    /// Elements satisfying `predicate`, in document order.
    fn select<P>(&self, mut predicate: P) -> Vec<Self::Node>
    where
        P: FnMut(&Self, Self::Node) -> bool,
        Self: Sized,
    {
        self.elements()
            .into_iter()
            .filter(|&node| predicate(self, node))
            .collect()
    }

    /// First element whose `id` attribute equals `id`.
    fn find_by_id(&self, id: &str) -> Option<Self::Node>
    where
        Self: Sized,
    {
        self.elements()
            .into_iter()
            .find(|&node| self.attr(node, "id") == Some(id))
    }
}

impl DocumentTree for Document {
    type Node = NodeId;

    fn elements(&self) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|&id| self.element(id).is_some())
            .collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Document::parent(self, node).filter(|&p| self.element(p).is_some())
    }

    fn tag_name(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |element| element.tag.as_str())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|element| element.attr(name))
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(node) {
            element.set_attr(name, value);
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.text_content(node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        Document::set_text(self, node, text);
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.create(NodeData::Element(crate::dom::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.append(parent, child);
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.attr(node, "hidden").is_none()
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(element) = self.element_mut(node) {
            if visible {
                element.remove_attr("hidden");
            } else {
                element.set_attr("hidden", "");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
