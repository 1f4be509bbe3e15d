use super::{depth, draw};
use crate::app_state::AppState;
use crate::dom::Document;
use crate::selector::Selector;
use crate::toc::TocBuilder;
use crate::visibility::PanelIds;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn app() -> AppState {
    let mut doc = Document::new();
    let body = doc.append_element(doc.root(), "body", &[]);
    for (tag, text) in [("h1", "Alpha"), ("h2", "Beta")] {
        let heading = doc.append_element(body, tag, &[]);
        doc.append_text(heading, text);
    }
    let ids = PanelIds::default();
    ids.ensure_in(&mut doc);
    let columns =
        TocBuilder::default().add_toc_entry(&mut doc, &Selector::parse("h1, h2").unwrap(), false);
    AppState::new("doc.html", doc, columns, &ids)
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

#[test]
fn test_depth_from_class() {
    assert_eq!(depth("h1"), 1);
    assert_eq!(depth("h3"), 3);
    assert_eq!(depth("h9"), 1);
    assert_eq!(depth("div"), 1);
}

#[test]
fn test_draw_records_trigger_area_and_hides_panel() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

    terminal.draw(|f| draw(f, &mut app)).unwrap();

    assert_eq!(app.trigger_area, Rect::new(0, 0, 7, 1));
    assert_eq!(app.panel_area, None);
    let text = screen(&terminal);
    assert!(text.contains("[ TOC ]"));
    assert!(text.contains("Alpha"));
    assert!(!text.contains("Contents"));
}

#[test]
fn test_draw_shows_panel_after_hovering_trigger() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|f| draw(f, &mut app)).unwrap();

    app.pointer_moved(2, 0);
    terminal.draw(|f| draw(f, &mut app)).unwrap();

    assert!(app.panel_area.is_some());
    let text = screen(&terminal);
    assert!(text.contains("Contents"));
    assert!(text.contains("alpha"), "Panel entries are lower-cased");
}
