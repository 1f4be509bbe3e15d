//! Hover-driven visibility of the TOC panel.
//!
//! The panel has two states and three inputs. Whatever the current state, entering the trigger
//! or the panel shows it and leaving the panel hides it:
//!
//! ```text
//!            EnterTrigger / EnterPanel
//!   Hidden ----------------------------> Visible
//!     ^                                    |
//!     |_____________ LeavePanel ___________|
//! ```
//!
//! Entering the panel while it is already visible keeps it visible, which is what lets the
//! pointer travel from the trigger onto the panel without the panel disappearing.

use crate::dom::Document;
use crate::tree::DocumentTree;

/// Identifier of the element that reveals the panel on hover.
pub const DEFAULT_TRIGGER_ID: &str = "toc_button";
/// Identifier of the element holding the TOC columns.
pub const DEFAULT_PANEL_ID: &str = "toc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer transitions the controller reacts to.
pub enum HoverEvent {
    /// The pointer moved onto the trigger.
    EnterTrigger,
    /// The pointer moved onto the panel.
    EnterPanel,
    /// The pointer moved off the panel.
    LeavePanel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Whether the panel is shown.
pub enum PanelState {
    #[default]
    /// Panel not displayed.
    Hidden,
    /// Panel displayed.
    Visible,
}

impl PanelState {
    #[must_use]
    /// State after `event`.
    pub fn on(self, event: HoverEvent) -> Self {
        match event {
            HoverEvent::EnterTrigger | HoverEvent::EnterPanel => Self::Visible,
            HoverEvent::LeavePanel => Self::Hidden,
        }
    }

    #[must_use]
    /// Whether this is [`PanelState::Visible`].
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifiers of the trigger and panel elements.
pub struct PanelIds {
    /// Identifier of the hover trigger.
    pub trigger: String,
    /// Identifier of the panel.
    pub panel: String,
}

impl Default for PanelIds {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_ID, DEFAULT_PANEL_ID)
    }
}

impl PanelIds {
    #[must_use]
    /// Pair of identifiers.
    pub fn new(trigger: impl Into<String>, panel: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            panel: panel.into(),
        }
    }

    /// Insert a trigger and a hidden panel at the top of `<body>` when they are missing.
    ///
    /// Falls back to the document root when there is no `<body>`. Elements that already
    /// exist are left where they are. Returns whether anything was inserted.
    pub fn ensure_in(&self, doc: &mut Document) -> bool {
        let host = doc.first_element("body").unwrap_or_else(|| doc.root());
        let mut inserted = false;

        if doc.find_by_id(&self.panel).is_none() {
            let panel = doc.create_element("div");
            doc.set_attr(panel, "id", &self.panel);
            doc.set_visible(panel, false);
            doc.insert(host, 0, panel);
            inserted = true;
        }
        if doc.find_by_id(&self.trigger).is_none() {
            let trigger = doc.create_element("div");
            doc.set_attr(trigger, "id", &self.trigger);
            doc.set_text(trigger, "TOC");
            doc.insert(host, 0, trigger);
            inserted = true;
        }
        if inserted {
            log::debug!(
                "Inserted TOC scaffold (#{}, #{})",
                self.trigger,
                self.panel
            );
        }
        inserted
    }
}

#[derive(Debug, Clone)]
/// Applies [`PanelState`] transitions to a panel element of a tree.
pub struct VisibilityController<N> {
    trigger: Option<N>,
    panel: Option<N>,
    state: PanelState,
}

impl<N: Copy + Eq + std::fmt::Debug> VisibilityController<N> {
    /// Locate the trigger and panel in `tree`.
    ///
    /// Missing elements are not an error: events belonging to them are ignored. The initial
    /// state follows the panel's current visibility.
    pub fn bind<T>(tree: &T, ids: &PanelIds) -> Self
    where
        T: DocumentTree<Node = N>,
    {
        let trigger = tree.find_by_id(&ids.trigger);
        let panel = tree.find_by_id(&ids.panel);
        let state = match panel {
            Some(panel) if tree.is_visible(panel) => PanelState::Visible,
            _ => PanelState::Hidden,
        };
        if trigger.is_none() || panel.is_none() {
            log::debug!(
                "TOC controller bound without {}",
                if panel.is_none() { "panel" } else { "trigger" }
            );
        }
        Self {
            trigger,
            panel,
            state,
        }
    }

    #[must_use]
    /// Current state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    /// Trigger element, if found when binding.
    pub fn trigger(&self) -> Option<N> {
        self.trigger
    }

    #[must_use]
    /// Panel element, if found when binding.
    pub fn panel(&self) -> Option<N> {
        self.panel
    }

    /// Feed `event` to the state machine and show or hide the panel accordingly.
    ///
    /// Does nothing when the element the event originates from, or the panel itself, is
    /// missing.
    pub fn dispatch<T>(&mut self, event: HoverEvent, tree: &mut T) -> PanelState
    where
        T: DocumentTree<Node = N>,
    {
        let source = match event {
            HoverEvent::EnterTrigger => self.trigger,
            HoverEvent::EnterPanel | HoverEvent::LeavePanel => self.panel,
        };
        let (Some(_), Some(panel)) = (source, self.panel) else {
            log::trace!("Ignoring {event:?}: element not bound");
            return self.state;
        };

        let next = self.state.on(event);
        if next != self.state {
            log::debug!("TOC panel {:?} -> {next:?} on {event:?}", self.state);
        }
        self.state = next;
        tree.set_visible(panel, next.is_visible());
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Area under the pointer.
pub enum Region {
    /// Over the trigger.
    Trigger,
    /// Over the panel.
    Panel,
}

#[derive(Debug, Clone, Default)]
/// Turns a stream of "pointer is over X" samples into enter/leave events.
pub struct HoverTracker {
    over: Option<Region>,
}

impl HoverTracker {
    #[must_use]
    /// Region the pointer was last seen over.
    pub fn over(&self) -> Option<Region> {
        self.over
    }

    /// Record that the pointer is now over `region` and return the events this crossing
    /// produces, leave before enter.
    pub fn moved_to(&mut self, region: Option<Region>) -> Vec<HoverEvent> {
        if region == self.over {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if self.over == Some(Region::Panel) {
            events.push(HoverEvent::LeavePanel);
        }
        match region {
            Some(Region::Trigger) => events.push(HoverEvent::EnterTrigger),
            Some(Region::Panel) => events.push(HoverEvent::EnterPanel),
            None => {}
        }
        self.over = region;
        events
    }
}

#[cfg(test)]
#[path = "tests/visibility.rs"]
mod tests;
