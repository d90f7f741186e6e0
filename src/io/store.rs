use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Document;

/// Filename of the durable slot inside the data directory.
pub const STORE_FILE: &str = "tarefas.json";

/// Error type for store writes. Reads never error: absence and parse
/// failure both fall back to the seeded document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// The durable slot: one JSON file holding the whole document.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// A store rooted at the given data directory.
    pub fn open(data_dir: &Path) -> Self {
        Store {
            path: data_dir.join(STORE_FILE),
        }
    }

    /// Default data directory: `$XDG_DATA_HOME/tarefa`, falling back to
    /// `~/.local/share/tarefa`.
    pub fn default_data_dir() -> PathBuf {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME")
            && !xdg.is_empty()
        {
            return PathBuf::from(xdg).join("tarefa");
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".local/share/tarefa")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the durable slot. Missing file yields the seeded starter
    /// document; malformed contents do the same, with a log line on
    /// stderr (never surfaced to the user). The fallback is not
    /// persisted until the first mutation.
    pub fn load(&self) -> Document {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Document::seeded(),
        };
        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!(
                    "warning: could not parse {}: {} (starting fresh)",
                    self.path.display(),
                    e
                );
                Document::seeded()
            }
        }
    }

    /// Write the full document as pretty JSON, atomically. Guarded: an
    /// empty-lists document is never written, so a half-initialized
    /// startup state cannot clobber a previously saved one.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        if doc.lists.is_empty() {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(doc).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e.into(),
        })?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        atomic_write(&self.path, json.as_bytes()).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Fire-and-forget save: a failed write is logged and dropped.
    /// Persistence failures are never fatal and never block the user.
    pub fn save_quiet(&self, doc: &Document) {
        if let Err(e) = self.save(doc) {
            eprintln!("warning: {}", e);
        }
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    io::Write::write_all(&mut tmp, content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
