use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{backup, doc_ops};
use crate::util::unicode;

use super::app::{App, ConfirmAction, ConfirmState, Mode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.show_help {
        // Any key dismisses the help overlay
        app.show_help = false;
        return;
    }
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::InsertItem | Mode::NewList => handle_text_input(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Lists => handle_lists(app, key),
    }
}

// ---------------------------------------------------------------------------
// Navigate
// ---------------------------------------------------------------------------

fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Transient messages live until the next keypress
    app.status = None;

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let count = app.visible_item_ids().len();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_item_id() {
                app.mutate(|doc| doc_ops::toggle_item(doc, &id));
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input.clear();
            app.mode = Mode::InsertItem;
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.cursor_item_id() {
                let text = app
                    .doc
                    .selected_list()
                    .and_then(|l| l.items.iter().find(|i| i.id == id))
                    .map(|i| i.text.clone())
                    .unwrap_or_default();
                app.confirm_state = Some(ConfirmState {
                    action: ConfirmAction::DeleteItem { item_id: id },
                    message: format!("Delete \"{}\"?", text),
                });
                app.mode = Mode::Confirm;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            app.input.clear();
            app.mode = Mode::NewList;
        }
        (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.lists_cursor = app
                .doc
                .lists
                .iter()
                .position(|l| l.id == app.doc.selected_list_id)
                .unwrap_or(0);
            app.mode = Mode::Lists;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('D')) => {
            if let Some(list) = app.doc.selected_list() {
                app.confirm_state = Some(ConfirmState {
                    action: ConfirmAction::DeleteList {
                        list_id: list.id.clone(),
                    },
                    message: format!("Delete list \"{}\"?", list.name),
                });
                app.mode = Mode::Confirm;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            let value = !app.doc.move_completed_to_end;
            app.mutate(|doc| doc_ops::set_move_completed_to_end(doc, value));
        }
        (KeyModifiers::NONE, KeyCode::Char('h')) => {
            let value = !app.doc.hide_completed;
            app.mutate(|doc| doc_ops::set_hide_completed(doc, value));
        }
        (KeyModifiers::SHIFT, KeyCode::Char('E')) => {
            export_backup(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('?')) => {
            app.show_help = true;
        }
        _ => {}
    }
}

fn export_backup(app: &mut App) {
    let name = backup::export_file_name(chrono::Local::now().date_naive());
    let result =
        backup::export_document(&app.doc).map_err(|e| e.to_string()).and_then(|json| {
            std::fs::write(&name, json).map_err(|e| e.to_string())
        });
    match result {
        Ok(()) => app.set_status(format!("exported to {}", name)),
        Err(e) => app.set_status(format!("export failed: {}", e)),
    }
}

// ---------------------------------------------------------------------------
// Text input (new item / new list)
// ---------------------------------------------------------------------------

fn handle_text_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.input);
            match app.mode {
                Mode::InsertItem => {
                    app.mutate(|doc| doc_ops::add_item(doc, &text).is_some());
                }
                Mode::NewList => {
                    let mut created = None;
                    app.mutate(|doc| {
                        created = doc_ops::add_list(doc, &text);
                        created.is_some()
                    });
                    if created.is_some() {
                        app.cursor = 0;
                    }
                }
                _ => {}
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            unicode::pop_grapheme(&mut app.input);
        }
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Confirm
// ---------------------------------------------------------------------------

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteItem { item_id } => {
                        app.mutate(|doc| doc_ops::delete_item(doc, &item_id));
                    }
                    ConfirmAction::DeleteList { list_id } => {
                        // The modal already was the confirmation gate
                        app.mutate(|doc| doc_ops::remove_list(doc, &list_id));
                        app.cursor = 0;
                    }
                }
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// List picker
// ---------------------------------------------------------------------------

fn handle_lists(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let count = app.doc.lists.len();
            if count > 0 && app.lists_cursor + 1 < count {
                app.lists_cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.lists_cursor = app.lists_cursor.saturating_sub(1);
        }
        (_, KeyCode::Enter) => {
            if let Some(list) = app.doc.lists.get(app.lists_cursor) {
                let id = list.id.clone();
                app.mutate(|doc| doc_ops::set_selected_list(doc, &id));
                app.cursor = 0;
                app.scroll_offset = 0;
            }
            app.mode = Mode::Navigate;
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(list) = app.doc.lists.get(app.lists_cursor) {
                app.confirm_state = Some(ConfirmState {
                    action: ConfirmAction::DeleteList {
                        list_id: list.id.clone(),
                    },
                    message: format!("Delete list \"{}\"?", list.name),
                });
                app.mode = Mode::Confirm;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            app.input.clear();
            app.mode = Mode::NewList;
        }
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
