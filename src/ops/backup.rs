use chrono::NaiveDate;

use crate::model::Document;

/// Error type for backup import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("not a valid backup file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialize the full document as pretty-printed JSON.
pub fn export_document(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Default export filename: `tarefas-<YYYY-MM-DD>.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("tarefas-{}.json", date.format("%Y-%m-%d"))
}

/// Parse a backup file into a document. All-or-nothing: on any parse
/// failure the caller keeps its current document untouched. `lists`
/// and `selectedListId` are required; the two view flags default to
/// `false` when absent.
pub fn import_document(json: &str) -> Result<Document, ImportError> {
    let doc: Document = serde_json::from_str(json)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_then_import_round_trips() {
        let doc = Document::seeded();
        let json = export_document(&doc).unwrap();
        let restored = import_document(&json).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn export_is_pretty_printed() {
        let json = export_document(&Document::seeded()).unwrap();
        assert!(json.contains("\n  \"lists\""));
    }

    #[test]
    fn file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(export_file_name(date), "tarefas-2026-08-23.json");
    }

    #[test]
    fn import_rejects_malformed_json() {
        assert!(import_document("not json {{{").is_err());
    }

    #[test]
    fn import_rejects_missing_required_fields() {
        assert!(import_document(r#"{"lists":[]}"#).is_err());
        assert!(import_document(r#"{"selectedListId":"1"}"#).is_err());
    }

    #[test]
    fn import_defaults_missing_flags_to_false() {
        let doc = import_document(r#"{"lists":[],"selectedListId":""}"#).unwrap();
        assert!(!doc.move_completed_to_end);
        assert!(!doc.hide_completed);
    }
}
