use crate::model::{Document, Item, TodoList};

/// The three derived orderings of a list's items. Pure projection:
/// recomputed on demand, never stored.
#[derive(Debug)]
pub struct Views<'a> {
    /// Items with `completed == false`, sorted by folded text.
    pub incomplete: Vec<&'a Item>,
    /// Items with `completed == true`, same sort.
    pub completed: Vec<&'a Item>,
    /// Every item, same sort. Used when completed items stay inline.
    pub all: Vec<&'a Item>,
}

/// Section label for count headers in the split display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Open,
    Completed,
}

/// One row of the rendered list, consumed by both the CLI and the TUI.
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    Header { section: Section, count: usize },
    Divider,
    Item(&'a Item),
}

/// Case-insensitive text ordering. Folds via Unicode lowercasing; ties
/// on folded text keep stable-sort order but that is not contractual.
fn by_folded_text(a: &&Item, b: &&Item) -> std::cmp::Ordering {
    a.text.to_lowercase().cmp(&b.text.to_lowercase())
}

/// Project a list into its three sorted orderings.
pub fn project(list: &TodoList) -> Views<'_> {
    let mut incomplete: Vec<&Item> = list.items.iter().filter(|i| !i.completed).collect();
    let mut completed: Vec<&Item> = list.items.iter().filter(|i| i.completed).collect();
    let mut all: Vec<&Item> = list.items.iter().collect();

    incomplete.sort_by(by_folded_text);
    completed.sort_by(by_folded_text);
    all.sort_by(by_folded_text);

    Views {
        incomplete,
        completed,
        all,
    }
}

/// The display policy: which rows the selected list renders as, given
/// the two view-option flags. Empty when no list is selected.
pub fn visible_rows(doc: &Document) -> Vec<Row<'_>> {
    match doc.selected_list() {
        Some(list) => list_rows(list, doc.move_completed_to_end, doc.hide_completed),
        None => Vec::new(),
    }
}

/// Display policy for one list:
///
/// - `move_completed_to_end == false`: one flat run of `all`, with
///   completed items dropped individually when `hide_completed`.
/// - `move_completed_to_end == true`: open items under a count header,
///   then (unless hidden) a divider and the completed items under
///   their own count header.
pub fn list_rows(list: &TodoList, move_completed_to_end: bool, hide_completed: bool) -> Vec<Row<'_>> {
    let views = project(list);
    let mut rows = Vec::new();

    if !move_completed_to_end {
        for item in views.all {
            if hide_completed && item.completed {
                continue;
            }
            rows.push(Row::Item(item));
        }
        return rows;
    }

    if !views.incomplete.is_empty() {
        rows.push(Row::Header {
            section: Section::Open,
            count: views.incomplete.len(),
        });
    }
    for item in views.incomplete {
        rows.push(Row::Item(item));
    }

    if !hide_completed && !views.completed.is_empty() {
        rows.push(Row::Divider);
        rows.push(Row::Header {
            section: Section::Completed,
            count: views.completed.len(),
        });
        for item in views.completed {
            rows.push(Row::Item(item));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoList;

    fn item(id: &str, text: &str, completed: bool) -> Item {
        Item {
            id: id.to_string(),
            text: text.to_string(),
            completed,
        }
    }

    fn list_of(items: Vec<Item>) -> TodoList {
        TodoList {
            id: "1".to_string(),
            name: "L1".to_string(),
            items,
        }
    }

    fn doc_of(items: Vec<Item>) -> Document {
        Document {
            lists: vec![list_of(items)],
            selected_list_id: "1".to_string(),
            move_completed_to_end: false,
            hide_completed: false,
        }
    }

    fn texts(rows: &[Row<'_>]) -> Vec<String> {
        rows.iter()
            .filter_map(|r| match r {
                Row::Item(i) => Some(i.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sort_is_case_insensitive() {
        let list = list_of(vec![
            item("1", "banana", false),
            item("2", "Apple", false),
            item("3", "cherry", false),
        ]);
        let views = project(&list);
        let order: Vec<&str> = views.all.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(order, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn project_splits_by_completion() {
        let list = list_of(vec![
            item("1", "done one", true),
            item("2", "open one", false),
            item("3", "done two", true),
        ]);
        let views = project(&list);
        assert_eq!(views.incomplete.len(), 1);
        assert_eq!(views.completed.len(), 2);
        assert_eq!(views.all.len(), 3);
    }

    #[test]
    fn project_never_mutates_storage_order() {
        let list = list_of(vec![
            item("1", "zzz", false),
            item("2", "aaa", false),
        ]);
        let _ = project(&list);
        assert_eq!(list.items[0].text, "zzz");
    }

    #[test]
    fn hide_completed_inline_drops_done_items() {
        // L1 = [A(done), B(open)], hideCompleted, inline mode → exactly {B}
        let mut doc = doc_of(vec![item("1", "A", true), item("2", "B", false)]);
        doc.hide_completed = true;
        let rows = visible_rows(&doc);
        assert_eq!(texts(&rows), vec!["B"]);
        assert!(!rows.iter().any(|r| matches!(r, Row::Header { .. })));
    }

    #[test]
    fn split_mode_renders_open_then_completed_with_headers() {
        let mut doc = doc_of(vec![item("1", "A", true), item("2", "B", false)]);
        doc.move_completed_to_end = true;
        let rows = visible_rows(&doc);

        assert!(matches!(
            rows[0],
            Row::Header {
                section: Section::Open,
                count: 1
            }
        ));
        assert!(matches!(rows[1], Row::Item(i) if i.text == "B"));
        assert!(matches!(rows[2], Row::Divider));
        assert!(matches!(
            rows[3],
            Row::Header {
                section: Section::Completed,
                count: 1
            }
        ));
        assert!(matches!(rows[4], Row::Item(i) if i.text == "A"));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn split_mode_hides_completed_section_entirely() {
        let mut doc = doc_of(vec![item("1", "A", true), item("2", "B", false)]);
        doc.move_completed_to_end = true;
        doc.hide_completed = true;
        let rows = visible_rows(&doc);
        assert_eq!(texts(&rows), vec!["B"]);
        assert!(!rows.iter().any(|r| matches!(r, Row::Divider)));
    }

    #[test]
    fn split_mode_omits_empty_headers() {
        let mut doc = doc_of(vec![item("1", "A", true)]);
        doc.move_completed_to_end = true;
        let rows = visible_rows(&doc);
        // No open header when there are no open items
        assert!(matches!(rows[0], Row::Divider));
    }

    #[test]
    fn no_selected_list_renders_nothing() {
        let mut doc = doc_of(vec![item("1", "A", false)]);
        doc.selected_list_id = "missing".to_string();
        assert!(visible_rows(&doc).is_empty());
    }
}
