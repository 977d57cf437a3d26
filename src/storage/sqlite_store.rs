use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use super::JournalStore;
use crate::entry::{timestamp_now, Entry, EntryFields};
use crate::error::{JournalError, Result};

const SELECT_ENTRY: &str =
    "SELECT id, date, topic, what_i_know, questions, aha_moments FROM entries";

/// SQLite-backed journal.
///
/// Holds only the database path. Each call opens its own connection and drops it
/// before returning, so no session outlives a single statement.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the store and make sure the schema exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}

impl JournalStore for SqliteStore {
    fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                topic TEXT,
                what_i_know TEXT,
                questions TEXT,
                aha_moments TEXT
            )",
            [],
        )?;
        debug!(path = %self.path.display(), "journal schema ready");
        Ok(())
    }

    fn create(&self, fields: &EntryFields) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO entries (date, topic, what_i_know, questions, aha_moments)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                timestamp_now(),
                fields.topic,
                fields.what_i_know,
                fields.questions,
                fields.aha_moments,
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "entry created");
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Entry>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{SELECT_ENTRY} ORDER BY id ASC"))?;

        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn get(&self, id: i64) -> Result<Option<Entry>> {
        let conn = self.connect()?;
        let entry = conn
            .query_row(&format!("{SELECT_ENTRY} WHERE id = ?1"), [id], entry_from_row)
            .optional()?;
        Ok(entry)
    }

    fn update(&self, id: i64, fields: &EntryFields) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE entries
             SET topic = ?1, what_i_know = ?2, questions = ?3, aha_moments = ?4
             WHERE id = ?5",
            params![
                fields.topic,
                fields.what_i_know,
                fields.questions,
                fields.aha_moments,
                id,
            ],
        )?;
        if changed == 0 {
            debug!(id, "update matched no entry");
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        if changed == 0 {
            debug!(id, "delete matched no entry");
        }
        Ok(())
    }
}

// Text columns are nullable, so rows written by other tools may carry NULLs.
fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };

    Ok(Entry {
        id: row.get(0)?,
        date: text(1)?,
        topic: text(2)?,
        what_i_know: text(3)?,
        questions: text(4)?,
        aha_moments: text(5)?,
    })
}

impl From<rusqlite::Error> for JournalError {
    fn from(e: rusqlite::Error) -> Self {
        JournalError::Storage(format!("SQLite error: {}", e))
    }
}
