use serde::Serialize;

use crate::model::{Document, Item, TodoList};
use crate::ops::view::{self, Row, Section};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListViewJson {
    pub list_id: String,
    pub list_name: String,
    pub move_completed_to_end: bool,
    pub hide_completed: bool,
    /// Visible items, in display order
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct ListInfoJson {
    pub id: String,
    pub name: String,
    pub selected: bool,
    pub done: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub lists: Vec<ListInfoJson>,
    pub done: usize,
    pub total: usize,
}

pub fn item_to_json(item: &Item) -> ItemJson {
    ItemJson {
        id: item.id.clone(),
        text: item.text.clone(),
        completed: item.completed,
    }
}

pub fn list_info_to_json(doc: &Document, list: &TodoList) -> ListInfoJson {
    ListInfoJson {
        id: list.id.clone(),
        name: list.name.clone(),
        selected: doc.selected_list_id == list.id,
        done: list.completed_count(),
        total: list.items.len(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Render one list's visible rows as plain text lines.
pub fn render_rows_for(
    list: &TodoList,
    move_completed_to_end: bool,
    hide_completed: bool,
) -> Vec<String> {
    let mut lines = Vec::new();
    for row in view::list_rows(list, move_completed_to_end, hide_completed) {
        match row {
            Row::Header { section, count } => {
                let label = match section {
                    Section::Open => "Open",
                    Section::Completed => "Completed",
                };
                lines.push(format!("{} ({})", label, count));
            }
            Row::Divider => lines.push("------".to_string()),
            Row::Item(item) => {
                let mark = if item.completed { 'x' } else { ' ' };
                lines.push(format!("  [{}] {:>3}  {}", mark, item.id, item.text));
            }
        }
    }
    lines
}

/// One summary line per list, selection marked with `*`.
pub fn render_list_summary(doc: &Document, list: &TodoList) -> String {
    let marker = if doc.selected_list_id == list.id {
        '*'
    } else {
        ' '
    };
    format!(
        "{} {:>3}  {}  ({}/{} done)",
        marker,
        list.id,
        list.name,
        list.completed_count(),
        list.items.len()
    )
}
