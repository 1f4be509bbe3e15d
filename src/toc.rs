//! Building TOC columns from the headings of a document.
//!
//! Each call to [`TocBuilder::add_toc_entry`] scans the elements a selector matches, makes sure
//! every one of them carries an anchor identifier, optionally prefixes its text with a running
//! numeral, and files a link to it into the current column. Columns are sealed into the panel
//! once they overflow and at the end of the scan.
//!
//! ```text
//! <div id="toc">
//!   <div>                                   <- one column
//!     <a href="#toc_e1" class="h1">1 intro</a>
//!     <a href="#usage" class="h2">2 usage</a>
//!     ...
//!   </div>
//!   <div>...</div>
//! </div>
//! ```

use crate::ids::IdGenerator;
use crate::selector::Selector;
use crate::tree::DocumentTree;
use crate::visibility::DEFAULT_PANEL_ID;
use serde::Serialize;
use std::collections::HashSet;

/// Entries a column holds before it is sealed.
pub const DEFAULT_COLUMN_CAPACITY: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A link to one heading.
pub struct TocEntry {
    /// Heading text at build time, lower-cased (numeral prefix included).
    pub label: String,
    /// Anchor reference, `#` followed by the heading identifier.
    pub href: String,
    /// Lower-cased tag name of the heading, used to style levels apart.
    pub class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// An ordered group of entries rendered side by side with its siblings.
pub struct TocColumn {
    /// Entries in document order.
    pub entries: Vec<TocEntry>,
}

impl TocColumn {
    #[must_use]
    /// Number of entries in the column.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether the column holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// When a full column is sealed.
///
/// With the default capacity of 24 and 30 headings:
///
/// ```text
/// AfterAppend: [25 entries] [5 entries]
/// AtCapacity:  [24 entries] [6 entries]
/// ```
pub enum ColumnSplit {
    #[default]
    /// Check for overflow after the entry is appended, so sealed columns hold `capacity + 1`.
    AfterAppend,
    /// Seal a column as soon as it holds `capacity` entries.
    AtCapacity,
}

#[derive(Debug, Clone)]
/// Builds TOC columns and owns the identifier generator shared by all of its calls.
pub struct TocBuilder {
    ids: IdGenerator,
    capacity: usize,
    split: ColumnSplit,
    panel_id: String,
}

impl Default for TocBuilder {
    fn default() -> Self {
        Self::new(IdGenerator::default())
    }
}

impl TocBuilder {
    #[must_use]
    /// Create a builder using `ids` for headings without an identifier.
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            ids,
            capacity: DEFAULT_COLUMN_CAPACITY,
            split: ColumnSplit::default(),
            panel_id: DEFAULT_PANEL_ID.to_string(),
        }
    }

    #[must_use]
    /// Set the column capacity (at least one).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    #[must_use]
    /// Choose when full columns are sealed.
    pub fn with_split(mut self, split: ColumnSplit) -> Self {
        self.split = split;
        self
    }

    #[must_use]
    /// Identifier of the panel element that receives the columns.
    pub fn with_panel_id(mut self, panel_id: impl Into<String>) -> Self {
        self.panel_id = panel_id.into();
        self
    }

    #[must_use]
    /// The identifier generator, for inspecting how many identifiers were handed out.
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Scan the elements matched by `selector` and append their links to the panel.
    ///
    /// Headings get an identifier when they lack one, skipping any the document already uses,
    /// and when `numerate` is set their text becomes `"<n> <text>"` where `n` counts headings
    /// across the whole call. The columns
    /// are returned in the order they were appended; if the tree has no panel they are still
    /// returned but nothing is attached. An empty selection appends nothing.
    pub fn add_toc_entry<T: DocumentTree>(
        &mut self,
        tree: &mut T,
        selector: &Selector,
        numerate: bool,
    ) -> Vec<TocColumn> {
        let panel = tree.find_by_id(&self.panel_id);
        let headings = selector.select(tree);
        let mut taken: HashSet<String> = tree
            .elements()
            .into_iter()
            .filter_map(|node| tree.attr(node, "id"))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        let mut sealed = Vec::new();
        let mut column = TocColumn::default();
        let mut call_count = 0usize;
        let mut column_count = 0usize;

        for heading in headings {
            call_count += 1;
            column_count += 1;

            if self.split == ColumnSplit::AtCapacity && column.len() == self.capacity {
                Self::seal(tree, panel, &mut column, &mut sealed);
                column_count = 1;
            }

            let text = tree.text(heading);
            if numerate {
                tree.set_text(heading, &format!("{call_count} {text}"));
            }

            let existing = tree
                .attr(heading, "id")
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            let id = if let Some(id) = existing {
                id
            } else {
                let mut id = self.ids.next();
                while taken.contains(&id) {
                    log::trace!("Skipping identifier {id} already present in the document");
                    id = self.ids.next();
                }
                taken.insert(id.clone());
                log::trace!("Assigned identifier {id} to heading {call_count}");
                tree.set_attr(heading, "id", &id);
                id
            };

            column.entries.push(TocEntry {
                label: tree.text(heading).to_lowercase(),
                href: format!("#{id}"),
                class: tree.tag_name(heading).to_lowercase(),
            });

            if self.split == ColumnSplit::AfterAppend && column_count > self.capacity {
                Self::seal(tree, panel, &mut column, &mut sealed);
                column_count = 0;
            }
        }

        if !column.is_empty() {
            Self::seal(tree, panel, &mut column, &mut sealed);
        }

        log::debug!(
            "Built {} column(s) from {call_count} heading(s) matching {selector:?}",
            sealed.len(),
            selector = selector.as_str(),
        );
        sealed
    }

    fn seal<T: DocumentTree>(
        tree: &mut T,
        panel: Option<T::Node>,
        column: &mut TocColumn,
        sealed: &mut Vec<TocColumn>,
    ) {
        let column = std::mem::take(column);
        log::debug!("Sealing column {} with {} entries", sealed.len() + 1, column.len());
        if let Some(panel) = panel {
            let container = tree.create_element("div");
            for entry in &column.entries {
                let link = tree.create_element("a");
                tree.set_attr(link, "href", &entry.href);
                tree.set_attr(link, "class", &entry.class);
                tree.set_text(link, &entry.label);
                tree.append_child(container, link);
            }
            tree.append_child(panel, container);
        }
        sealed.push(column);
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
