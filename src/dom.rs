//! In-memory element tree standing in for a browser DOM.
//!
//! Nodes live in an arena owned by the [`Document`] and refer to each other by [`NodeId`].
//! Detached nodes (for example the old children replaced by [`Document::set_text`]) stay in the
//! arena but are unreachable from the root, so identifiers handed out earlier never dangle.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle to a node inside a [`Document`].
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Tag name and attributes of an element node.
pub struct Element {
    /// Tag name as written in the source.
    pub tag: String,
    /// Attributes in source order.
    pub attrs: Vec<(String, String)>,
}

impl Element {
    #[must_use]
    /// Value of the first attribute called `name` (ASCII case-insensitive).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Overwrite the attribute called `name`, appending it when absent.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some((_, existing)) = self
            .attrs
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            value.clone_into(existing);
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Drop every attribute called `name`.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Payload of a node.
pub enum NodeData {
    /// The single root of every document.
    Document,
    /// A `<!DOCTYPE ...>` declaration kept verbatim.
    Doctype(String),
    /// An element with children.
    Element(Element),
    /// Character data, already entity-decoded.
    Text(String),
    /// Comment body without the `<!--` `-->` delimiters.
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
/// Arena-backed document tree rooted at a [`NodeData::Document`] node.
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Create a document holding only its root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    /// Payload of `id`.
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    #[must_use]
    /// Element payload of `id`, if it is an element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable element payload of `id`, if it is an element.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    /// Children of `id` in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[must_use]
    /// Parent of `id`, `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Allocate a detached node.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Move `child` to the end of `parent`'s children, detaching it from any previous parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Move `child` to position `index` among `parent`'s children (clamped to the end).
    pub fn insert(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Remove `id` from its parent, keeping its own subtree intact.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Create an element with `attrs` and append it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> NodeId {
        let id = self.create(NodeData::Element(Element {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }));
        self.append(parent, id);
        id
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.create(NodeData::Text(text.to_string()));
        self.append(parent, id);
        id
    }

    #[must_use]
    /// All nodes reachable from the root, in document (pre-)order, root included.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    #[must_use]
    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Document | NodeData::Element(_) => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
            NodeData::Doctype(_) | NodeData::Comment(_) => {}
        }
    }

    /// Replace the children of `id` with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        let old = std::mem::take(&mut self.nodes[id.0].children);
        for child in old {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            self.append_text(id, text);
        }
    }

    #[must_use]
    /// First element whose tag matches `tag` (ASCII case-insensitive), in document order.
    pub fn first_element(&self, tag: &str) -> Option<NodeId> {
        self.descendants().into_iter().find(|&id| {
            self.element(id)
                .is_some_and(|element| element.tag.eq_ignore_ascii_case(tag))
        })
    }
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
