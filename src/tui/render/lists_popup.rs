use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Centered list picker popup.
pub fn render_lists_popup(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let inner_w: u16 = 38;
    let inner_h = app.doc.lists.len().max(1) as u16;
    let w = (inner_w + 2).min(area.width);
    let h = (inner_h + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Lists ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    if app.doc.lists.is_empty() {
        lines.push(Line::from(Span::styled(
            "no lists - press n to create one",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    for (i, list) in app.doc.lists.iter().enumerate() {
        let on_cursor = i == app.lists_cursor;
        let row_bg = if on_cursor { app.theme.selection_bg } else { bg };
        let fg = if on_cursor {
            app.theme.text_bright
        } else {
            app.theme.text
        };
        let selected_mark = if list.id == app.doc.selected_list_id {
            '*'
        } else {
            ' '
        };
        let label = format!(
            "{} {}  ({}/{})",
            selected_mark,
            list.name,
            list.completed_count(),
            list.items.len()
        );
        let label = unicode::truncate_to_width(&label, inner.width as usize);
        let pad = (inner.width as usize).saturating_sub(unicode::display_width(&label));
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(fg).bg(row_bg)),
            Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}
