use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const KEYS: &[(&str, &str)] = &[
    ("j/k", "move cursor"),
    ("space/x", "toggle item"),
    ("a", "add item"),
    ("d", "delete item"),
    ("l", "list picker"),
    ("n", "new list"),
    ("D", "delete current list"),
    ("e", "completed to end on/off"),
    ("h", "hide completed on/off"),
    ("E", "export backup"),
    ("q", "quit"),
];

/// Centered help overlay; any key dismisses it.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let w: u16 = 42.min(area.width);
    let h = (KEYS.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<9}", key),
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
                Span::styled(
                    (*what).to_string(),
                    Style::default().fg(app.theme.text).bg(bg),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}
