//! State of the terminal preview, where mouse hover drives the panel controller.
//!
//! The preview draws a trigger bar above the document outline. Pointer motion is hit-tested
//! against the trigger and (while shown) the panel, converted into enter/leave events by a
//! [`HoverTracker`] and fed to the same [`VisibilityController`] that mutates the document's
//! panel element. The UI reads visibility back from the controller, so what is on screen is
//! exactly what the document says.

use crate::dom::{Document, NodeId};
use crate::toc::TocColumn;
use crate::tree::DocumentTree;
use crate::visibility::{HoverTracker, PanelIds, PanelState, Region, VisibilityController};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One heading as listed in the preview body.
pub struct OutlineLine {
    /// Lower-cased tag name of the heading.
    pub class: String,
    /// Heading text as it now reads in the document.
    pub text: String,
    /// Anchor the TOC links to.
    pub href: String,
}

/// Single source of truth for the preview.
pub struct AppState {
    /// Name shown in the status line.
    pub title: String,
    /// The document whose panel is shown and hidden.
    pub document: Document,
    /// Columns built for the panel, in display order.
    pub columns: Vec<TocColumn>,
    /// Headings in document order, as linked from the columns.
    pub outline: Vec<OutlineLine>,
    /// Hover state machine bound to the document's trigger and panel.
    pub controller: VisibilityController<NodeId>,
    /// Region the pointer was last over.
    pub tracker: HoverTracker,
    /// Screen area of the trigger, set while drawing.
    pub trigger_area: Rect,
    /// Screen area of the panel, set while drawing and only while it is shown.
    pub panel_area: Option<Rect>,
}

impl AppState {
    #[must_use]
    /// Bind the controller to `document` and collect the outline the columns link to.
    pub fn new(
        title: impl Into<String>,
        document: Document,
        columns: Vec<TocColumn>,
        ids: &PanelIds,
    ) -> Self {
        let controller = VisibilityController::bind(&document, ids);
        let outline = columns
            .iter()
            .flat_map(|column| &column.entries)
            .map(|entry| {
                let text = entry
                    .href
                    .strip_prefix('#')
                    .and_then(|id| document.find_by_id(id))
                    .map_or_else(|| entry.label.clone(), |node| document.text(node));
                OutlineLine {
                    class: entry.class.clone(),
                    text,
                    href: entry.href.clone(),
                }
            })
            .collect();

        Self {
            title: title.into(),
            document,
            columns,
            outline,
            controller,
            tracker: HoverTracker::default(),
            trigger_area: Rect::default(),
            panel_area: None,
        }
    }

    #[must_use]
    /// Whether the panel is currently shown.
    pub fn panel_visible(&self) -> bool {
        self.controller.state().is_visible()
    }

    #[must_use]
    /// Region under the screen cell `(column, row)`. The panel wins where it overlaps.
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let position = Position::new(column, row);
        if self.panel_visible()
            && self
                .panel_area
                .is_some_and(|area| area.contains(position))
        {
            Some(Region::Panel)
        } else if self.trigger_area.contains(position) {
            Some(Region::Trigger)
        } else {
            None
        }
    }

    /// Handle pointer motion to `(column, row)` and return the resulting panel state.
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> PanelState {
        let region = self.region_at(column, row);
        for event in self.tracker.moved_to(region) {
            self.controller.dispatch(event, &mut self.document);
        }
        self.controller.state()
    }

    #[must_use]
    /// Total number of TOC entries across all columns.
    pub fn entry_count(&self) -> usize {
        self.columns.iter().map(TocColumn::len).sum()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
