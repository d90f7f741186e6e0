use crate::model::{Document, Item, TodoList};

/// Yes/no gate for destructive operations. The CLI backs this with a
/// stdin prompt (or `--yes`), the TUI with a modal confirm mode, and
/// tests with a closure.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Next fresh id: one past the highest numeric id anywhere in the
/// document. Monotonic within a document, so rapid successive creates
/// never collide (ids stay strings in storage).
pub fn next_id(doc: &Document) -> String {
    let mut max = 0u64;
    for list in &doc.lists {
        if let Ok(n) = list.id.parse::<u64>() {
            max = max.max(n);
        }
        for item in &list.items {
            if let Ok(n) = item.id.parse::<u64>() {
                max = max.max(n);
            }
        }
    }
    (max + 1).to_string()
}

// ---------------------------------------------------------------------------
// Mutations
//
// Each returns whether the document changed. Callers persist only on
// `true`. Trivial precondition failures (blank text, unknown id, no
// selection) are silent no-ops.
// ---------------------------------------------------------------------------

/// Append a new empty list and select it. Returns the new list's id,
/// or None if `name` trims to empty.
pub fn add_list(doc: &mut Document, name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let id = next_id(doc);
    doc.lists.push(TodoList::new(id.clone(), name.to_string()));
    doc.selected_list_id = id.clone();
    Some(id)
}

/// Delete a list after the confirmation port says yes. If the deleted
/// list was selected and others remain, selection moves to the first
/// remaining list; deleting the last list leaves the selection
/// dangling.
pub fn delete_list(doc: &mut Document, list_id: &str, confirm: &dyn ConfirmPrompt) -> bool {
    let Some(list) = doc.find_list(list_id) else {
        return false;
    };
    if !confirm.confirm(&format!("Delete list \"{}\"?", list.name)) {
        return false;
    }
    remove_list(doc, list_id)
}

/// Remove a list without a confirmation gate. The TUI calls this after
/// its own modal confirm.
pub fn remove_list(doc: &mut Document, list_id: &str) -> bool {
    let before = doc.lists.len();
    doc.lists.retain(|l| l.id != list_id);
    if doc.lists.len() == before {
        return false;
    }
    if doc.selected_list_id == list_id
        && let Some(first) = doc.lists.first()
    {
        doc.selected_list_id = first.id.clone();
    }
    true
}

/// Append a new incomplete item to the selected list. Returns the new
/// item's id, or None if `text` trims to empty or no list is selected.
pub fn add_item(doc: &mut Document, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() || doc.selected_list().is_none() {
        return None;
    }
    let id = next_id(doc);
    let item = Item::new(id.clone(), text.to_string());
    doc.selected_list_mut()?.items.push(item);
    Some(id)
}

/// Flip `completed` on the matching item within the selected list.
pub fn toggle_item(doc: &mut Document, item_id: &str) -> bool {
    let Some(list) = doc.selected_list_mut() else {
        return false;
    };
    match list.items.iter_mut().find(|i| i.id == item_id) {
        Some(item) => {
            item.completed = !item.completed;
            true
        }
        None => false,
    }
}

/// Remove the matching item from the selected list.
pub fn delete_item(doc: &mut Document, item_id: &str) -> bool {
    let Some(list) = doc.selected_list_mut() else {
        return false;
    };
    let before = list.items.len();
    list.items.retain(|i| i.id != item_id);
    list.items.len() != before
}

pub fn set_selected_list(doc: &mut Document, list_id: &str) -> bool {
    if doc.selected_list_id == list_id {
        return false;
    }
    doc.selected_list_id = list_id.to_string();
    true
}

pub fn set_move_completed_to_end(doc: &mut Document, value: bool) -> bool {
    if doc.move_completed_to_end == value {
        return false;
    }
    doc.move_completed_to_end = value;
    true
}

pub fn set_hide_completed(doc: &mut Document, value: bool) -> bool {
    if doc.hide_completed == value {
        return false;
    }
    doc.hide_completed = value;
    true
}
