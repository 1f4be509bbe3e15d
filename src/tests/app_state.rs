use super::AppState;
use crate::dom::Document;
use crate::selector::Selector;
use crate::toc::TocBuilder;
use crate::tree::DocumentTree;
use crate::visibility::{PanelIds, PanelState, Region};
use ratatui::layout::Rect;

fn preview() -> AppState {
    let mut doc = Document::new();
    let body = doc.append_element(doc.root(), "body", &[]);
    for (tag, text) in [("h1", "Intro"), ("h2", "Setup"), ("h2", "Usage")] {
        let heading = doc.append_element(body, tag, &[]);
        doc.append_text(heading, text);
    }
    let ids = PanelIds::default();
    ids.ensure_in(&mut doc);
    let columns =
        TocBuilder::default().add_toc_entry(&mut doc, &Selector::parse("h1, h2").unwrap(), true);

    let mut app = AppState::new("test.html", doc, columns, &ids);
    app.trigger_area = Rect::new(0, 0, 7, 1);
    app.panel_area = Some(Rect::new(0, 1, 40, 10));
    app
}

fn panel_hidden_in_document(app: &AppState) -> bool {
    let panel = app.controller.panel().unwrap();
    !app.document.is_visible(panel)
}

#[test]
fn test_outline_reads_numbered_headings() {
    let app = preview();
    let texts: Vec<&str> = app.outline.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["1 Intro", "2 Setup", "3 Usage"]);
    assert_eq!(app.outline[1].class, "h2");
    assert_eq!(app.outline[0].href, "#toc_e1");
    assert_eq!(app.entry_count(), 3);
}

#[test]
fn test_starts_hidden() {
    let app = preview();
    assert!(!app.panel_visible());
    assert!(panel_hidden_in_document(&app));
}

#[test]
fn test_hover_trigger_opens_and_leaving_panel_closes() {
    let mut app = preview();

    assert_eq!(app.pointer_moved(3, 0), PanelState::Visible);
    assert!(!panel_hidden_in_document(&app));

    // Straight from the trigger onto the panel.
    assert_eq!(app.pointer_moved(3, 2), PanelState::Visible);
    assert_eq!(app.tracker.over(), Some(Region::Panel));

    // Off the panel entirely.
    assert_eq!(app.pointer_moved(60, 20), PanelState::Hidden);
    assert!(panel_hidden_in_document(&app));
}

#[test]
fn test_hidden_panel_is_not_hoverable() {
    let mut app = preview();
    assert_eq!(app.region_at(10, 5), None);
    assert_eq!(app.pointer_moved(10, 5), PanelState::Hidden);
}

#[test]
fn test_panel_wins_over_trigger_when_overlapping() {
    let mut app = preview();
    app.pointer_moved(1, 0);
    app.panel_area = Some(Rect::new(0, 0, 40, 10));
    assert_eq!(app.region_at(1, 0), Some(Region::Panel));
}
