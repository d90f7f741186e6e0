use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::lock::FileLock;
use crate::io::store::Store;
use crate::model::Document;
use crate::ops::view::{self, Row};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new item's text
    InsertItem,
    /// Typing a new list's name
    NewList,
    /// Pending yes/no on a destructive action
    Confirm,
    /// List picker popup
    Lists,
}

/// What a pending confirm will do on `y`
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteItem { item_id: String },
    DeleteList { list_id: String },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub data_dir: PathBuf,
    pub doc: Document,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible item rows of the selected list
    pub cursor: usize,
    /// First visible row (scroll position)
    pub scroll_offset: usize,
    /// Shared text buffer for InsertItem / NewList
    pub input: String,
    pub confirm_state: Option<ConfirmState>,
    /// Cursor for the list picker
    pub lists_cursor: usize,
    pub show_help: bool,
    /// Transient message shown in the status row
    pub status: Option<String>,
}

impl App {
    pub fn new(store: Store, data_dir: PathBuf, doc: Document) -> Self {
        let lists_cursor = doc
            .lists
            .iter()
            .position(|l| l.id == doc.selected_list_id)
            .unwrap_or(0);
        App {
            store,
            data_dir,
            doc,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            confirm_state: None,
            lists_cursor,
            show_help: false,
            status: None,
        }
    }

    /// Apply a mutation; persist when it reports a change. The save is
    /// fire-and-forget and the advisory lock only guards the write.
    pub fn mutate<F: FnOnce(&mut Document) -> bool>(&mut self, f: F) {
        if f(&mut self.doc) {
            let _lock = FileLock::acquire_default(&self.data_dir);
            self.store.save_quiet(&self.doc);
            self.clamp_cursor();
        }
    }

    /// Ids of the item rows currently visible, in display order.
    pub fn visible_item_ids(&self) -> Vec<String> {
        view::visible_rows(&self.doc)
            .iter()
            .filter_map(|row| match row {
                Row::Item(item) => Some(item.id.clone()),
                _ => None,
            })
            .collect()
    }

    /// The item id under the cursor, if any.
    pub fn cursor_item_id(&self) -> Option<String> {
        self.visible_item_ids().get(self.cursor).cloned()
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.visible_item_ids().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
        let lists = self.doc.lists.len();
        if lists == 0 {
            self.lists_cursor = 0;
        } else {
            self.lists_cursor = self.lists_cursor.min(lists - 1);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}

pub fn run(data_dir: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(data_dir);
    let doc = store.load();
    let mut app = App::new(store, data_dir.to_path_buf(), doc);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use tempfile::TempDir;

    fn test_app(doc: Document) -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path());
        let app = App::new(store, dir.path().to_path_buf(), doc);
        (app, dir)
    }

    #[test]
    fn visible_item_ids_follow_display_order() {
        let doc = Document {
            lists: vec![crate::model::TodoList {
                id: "1".into(),
                name: "L".into(),
                items: vec![
                    Item {
                        id: "2".into(),
                        text: "banana".into(),
                        completed: false,
                    },
                    Item {
                        id: "3".into(),
                        text: "Apple".into(),
                        completed: false,
                    },
                ],
            }],
            selected_list_id: "1".into(),
            move_completed_to_end: false,
            hide_completed: false,
        };
        let (app, _dir) = test_app(doc);
        assert_eq!(app.visible_item_ids(), vec!["3", "2"]);
    }

    #[test]
    fn mutate_persists_on_change() {
        let (mut app, dir) = test_app(Document::seeded());
        app.mutate(|doc| crate::ops::doc_ops::add_item(doc, "saved").is_some());
        let reloaded = Store::open(dir.path()).load();
        assert_eq!(reloaded.item_count(), 4);
    }

    #[test]
    fn mutate_skips_save_when_unchanged() {
        let (mut app, dir) = test_app(Document::seeded());
        app.mutate(|doc| crate::ops::doc_ops::add_item(doc, "  ").is_some());
        assert!(!Store::open(dir.path()).path().exists());
    }

    #[test]
    fn cursor_clamps_after_shrink() {
        let (mut app, _dir) = test_app(Document::seeded());
        app.cursor = 2;
        app.mutate(|doc| {
            doc.lists[0].items.truncate(1);
            true
        });
        assert_eq!(app.cursor, 0);
    }
}
