use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view::{self, Row, Section};
use crate::tui::app::App;
use crate::util::unicode;

/// Render the selected list: headers, divider and items per the
/// display policy, with the cursor row highlighted.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    if app.doc.selected_list().is_none() {
        let line = Line::from(Span::styled(
            " no list selected - press n to create one",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let rows = view::visible_rows(&app.doc);
    if rows.is_empty() {
        let line = Line::from(Span::styled(
            " no tasks yet - press a to add one",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_row = 0usize;
    let mut item_idx = 0usize;

    for row in &rows {
        match row {
            Row::Header { section, count } => {
                let label = match section {
                    Section::Open => "Open",
                    Section::Completed => "Completed",
                };
                lines.push(Line::from(Span::styled(
                    format!(" {} ({})", label, count),
                    Style::default().fg(app.theme.dim).bg(bg),
                )));
            }
            Row::Divider => {
                lines.push(Line::from(Span::styled(
                    format!(" {}", "\u{2500}".repeat(width.saturating_sub(2))),
                    Style::default().fg(app.theme.dim).bg(bg),
                )));
            }
            Row::Item(item) => {
                let selected = item_idx == app.cursor;
                if selected {
                    cursor_row = lines.len();
                }

                let row_bg = if selected { app.theme.selection_bg } else { bg };
                let marker = if selected { "\u{258C}" } else { " " };
                let checkbox = if item.completed { "(x)" } else { "( )" };
                let checkbox_fg = if item.completed {
                    app.theme.green
                } else {
                    app.theme.text
                };
                let text_fg = if item.completed {
                    app.theme.dim
                } else if selected {
                    app.theme.text_bright
                } else {
                    app.theme.text
                };

                let text = unicode::truncate_to_width(&item.text, width.saturating_sub(6));
                let mut spans = vec![
                    Span::styled(
                        marker.to_string(),
                        Style::default().fg(app.theme.selection_border).bg(row_bg),
                    ),
                    Span::styled(
                        format!("{} ", checkbox),
                        Style::default().fg(checkbox_fg).bg(row_bg),
                    ),
                    Span::styled(text.clone(), Style::default().fg(text_fg).bg(row_bg)),
                ];
                // Pad the row so the selection background spans the width
                let used = 1 + 4 + unicode::display_width(&text);
                if used < width {
                    spans.push(Span::styled(
                        " ".repeat(width - used),
                        Style::default().bg(row_bg),
                    ));
                }
                lines.push(Line::from(spans));
                item_idx += 1;
            }
        }
    }

    // Keep the cursor row on screen
    if cursor_row < app.scroll_offset {
        app.scroll_offset = cursor_row;
    }
    if height > 0 && cursor_row >= app.scroll_offset + height {
        app.scroll_offset = cursor_row + 1 - height;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(height)
        .collect();
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::Store;
    use crate::model::{Document, Item, TodoList};
    use crate::tui::render::test_helpers::render_to_string;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn app_with(doc: Document) -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path());
        let app = App::new(store, dir.path().to_path_buf(), doc);
        (app, dir)
    }

    fn doc(items: Vec<(&str, &str, bool)>) -> Document {
        Document {
            lists: vec![TodoList {
                id: "1".into(),
                name: "L1".into(),
                items: items
                    .into_iter()
                    .map(|(id, text, completed)| Item {
                        id: id.into(),
                        text: text.into(),
                        completed,
                    })
                    .collect(),
            }],
            selected_list_id: "1".into(),
            move_completed_to_end: false,
            hide_completed: false,
        }
    }

    #[test]
    fn renders_sorted_items_with_checkboxes() {
        let (mut app, _dir) = app_with(doc(vec![
            ("1", "banana", false),
            ("2", "Apple", true),
            ("3", "cherry", false),
        ]));
        let out = render_to_string(30, 6, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(
            out,
            "\u{258C}( ) Apple\n (x) banana\n ( ) cherry"
        );
    }

    #[test]
    fn split_mode_shows_headers_and_divider() {
        let mut d = doc(vec![("1", "A", true), ("2", "B", false)]);
        d.move_completed_to_end = true;
        let (mut app, _dir) = app_with(d);
        let out = render_to_string(20, 8, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " Open (1)");
        assert!(lines[1].contains("( ) B"));
        assert!(lines[2].starts_with(" \u{2500}"));
        assert_eq!(lines[3], " Completed (1)");
        assert!(lines[4].contains("(x) A"));
    }

    #[test]
    fn empty_list_shows_hint() {
        let (mut app, _dir) = app_with(doc(vec![]));
        let out = render_to_string(50, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(out.contains("no tasks yet"));
    }

    #[test]
    fn dangling_selection_shows_hint() {
        let mut d = doc(vec![("1", "A", false)]);
        d.selected_list_id = "missing".into();
        let (mut app, _dir) = app_with(d);
        let out = render_to_string(50, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(out.contains("no list selected"));
    }

    #[test]
    fn selection_marker_follows_cursor() {
        let (mut app, _dir) = app_with(doc(vec![("1", "aaa", false), ("2", "bbb", false)]));
        app.cursor = 1;
        let out = render_to_string(20, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with(' '));
        assert!(lines[1].starts_with('\u{258C}'));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let items: Vec<(String, String, bool)> = (0..20)
            .map(|i| (format!("{}", i + 1), format!("task {:02}", i), false))
            .collect();
        let d = Document {
            lists: vec![TodoList {
                id: "99".into(),
                name: "L".into(),
                items: items
                    .into_iter()
                    .map(|(id, text, completed)| Item { id, text, completed })
                    .collect(),
            }],
            selected_list_id: "99".into(),
            move_completed_to_end: false,
            hide_completed: false,
        };
        let (mut app, _dir) = app_with(d);
        app.cursor = 19;
        let out = render_to_string(20, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(out.contains("task 19"));
        assert!(!out.contains("task 00"));
        assert_eq!(app.scroll_offset, 15);
    }
}
