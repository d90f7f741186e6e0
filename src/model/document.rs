use serde::{Deserialize, Serialize};

/// A single task: text plus a completed flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create a new incomplete item.
    pub fn new(id: String, text: String) -> Self {
        Item {
            id,
            text,
            completed: false,
        }
    }
}

/// A named collection of items, independently selectable.
///
/// Items are stored in insertion order; display order is always derived
/// (see `ops::view`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new(id: String, name: String) -> Self {
        TodoList {
            id,
            name,
            items: Vec::new(),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }
}

/// The full persisted application state: every list, the current
/// selection, and the two view-option flags.
///
/// Field names serialize in camelCase so saved documents and exports
/// keep the historical on-disk shape. The two flags default to `false`
/// when missing from an imported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub lists: Vec<TodoList>,
    pub selected_list_id: String,
    #[serde(default)]
    pub move_completed_to_end: bool,
    #[serde(default)]
    pub hide_completed: bool,
}

impl Document {
    /// The seeded starter document used when no saved state exists.
    pub fn seeded() -> Self {
        Document {
            lists: vec![TodoList {
                id: "1".to_string(),
                name: "Lista Principal".to_string(),
                items: vec![
                    Item::new("1".to_string(), "Estudar React".to_string()),
                    Item {
                        id: "2".to_string(),
                        text: "Fazer exercícios".to_string(),
                        completed: true,
                    },
                    Item::new("3".to_string(), "Ler um livro".to_string()),
                ],
            }],
            selected_list_id: "1".to_string(),
            move_completed_to_end: false,
            hide_completed: false,
        }
    }

    pub fn find_list(&self, list_id: &str) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    /// The currently selected list, or None if `selected_list_id` does
    /// not name an existing list. List-scoped operations are no-ops in
    /// that case.
    pub fn selected_list(&self) -> Option<&TodoList> {
        self.find_list(&self.selected_list_id)
    }

    pub fn selected_list_mut(&mut self) -> Option<&mut TodoList> {
        let id = self.selected_list_id.clone();
        self.lists.iter_mut().find(|l| l.id == id)
    }

    /// Total item count across all lists.
    pub fn item_count(&self) -> usize {
        self.lists.iter().map(|l| l.items.len()).sum()
    }
}
