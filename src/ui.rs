//! The UI renders the preview state into something hoverable.
//!
//! A one-line trigger bar sits above the outline of the document. While the controller says the
//! panel is visible, the TOC columns are drawn over the outline, side by side, one list per
//! column. The areas of the trigger and the panel are written back into the state so pointer
//! motion can be hit-tested against what was actually drawn.

use crate::app_state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const TRIGGER_LABEL: &str = "[ TOC ]";

/// Heading depth encoded in a TOC class such as `h2`; anything else counts as depth 1.
fn depth(class: &str) -> usize {
    class
        .strip_prefix('h')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| (1..=6).contains(&n))
        .unwrap_or(1)
}

fn entry_style(class: &str) -> Style {
    match depth(class) {
        1 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        2 => Style::default().fg(Color::Blue),
        _ => Style::default().fg(Color::Gray),
    }
}

/// Renders the trigger bar, the outline, the status line and, when shown, the panel.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_trigger(f, app, chunks[0]);
    draw_outline(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);

    if app.panel_visible() {
        draw_panel(f, app, chunks[1]);
        app.panel_area = Some(chunks[1]);
    } else {
        app.panel_area = None;
    }
}

fn draw_trigger(f: &mut Frame, app: &mut AppState, area: Rect) {
    let width = u16::try_from(TRIGGER_LABEL.len()).unwrap_or(u16::MAX).min(area.width);
    let trigger = Rect::new(area.x, area.y, width, area.height);
    let style = if app.panel_visible() {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Yellow)
    };
    f.render_widget(Paragraph::new(Span::styled(TRIGGER_LABEL, style)), trigger);
    app.trigger_area = trigger;
}

fn draw_outline(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .outline
        .iter()
        .map(|line| {
            let indent = "  ".repeat(depth(&line.class) - 1);
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(line.text.clone(), entry_style(&line.class)),
                Span::styled(
                    format!("  {}", line.href),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.title.as_str()),
    );
    f.render_widget(list, area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let text = format!(
        "{} entries in {} column(s) | hover {TRIGGER_LABEL} to open | q: quit",
        app.entry_count(),
        app.columns.len()
    );
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_panel(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Contents")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.columns.is_empty() {
        f.render_widget(Paragraph::new("No headings matched"), inner);
        return;
    }

    let count = u32::try_from(app.columns.len()).unwrap_or(u32::MAX);
    let constraints: Vec<Constraint> = app
        .columns
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (column, column_area) in app.columns.iter().zip(areas.iter()) {
        let items: Vec<ListItem> = column
            .entries
            .iter()
            .map(|entry| {
                let indent = "  ".repeat(depth(&entry.class) - 1);
                ListItem::new(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(entry.label.clone(), entry_style(&entry.class)),
                ]))
            })
            .collect();
        f.render_widget(List::new(items), *column_area);
    }
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
