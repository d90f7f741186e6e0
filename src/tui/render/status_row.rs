use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): transient messages,
/// input prompts, confirm questions, or key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status {
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ))
            } else {
                hint_line(app, "a add  space toggle  d delete  l lists  ? help", width)
            }
        }
        Mode::InsertItem => prompt_line(app, "new task", width),
        Mode::NewList => prompt_line(app, "new list", width),
        Mode::Confirm => {
            let message = app
                .confirm_state
                .as_ref()
                .map(|s| s.message.as_str())
                .unwrap_or("");
            Line::from(vec![
                Span::styled(
                    message.to_string(),
                    Style::default().fg(app.theme.red).bg(bg),
                ),
                Span::styled(
                    "  y confirm  n cancel",
                    Style::default().fg(app.theme.dim).bg(bg),
                ),
            ])
        }
        Mode::Lists => hint_line(app, "Enter select  d delete  n new  Esc close", width),
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn hint_line<'a>(app: &App, hint: &'a str, _width: usize) -> Line<'a> {
    Line::from(Span::styled(
        hint,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

fn prompt_line<'a>(app: &'a App, label: &str, _width: usize) -> Line<'a> {
    let bg = app.theme.background;
    Line::from(vec![
        Span::styled(
            format!("{}: {}", label, app.input),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            "  Enter confirm  Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ])
}
