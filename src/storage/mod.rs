mod sqlite_store;

pub use sqlite_store::SqliteStore;

use crate::entry::{Entry, EntryFields};
use crate::error::Result;

/// Persistence boundary for journal entries.
///
/// Handlers only see this trait, so they never manage connections themselves.
pub trait JournalStore {
    /// Create the `entries` table if it does not exist yet. Safe on every startup.
    fn initialize(&self) -> Result<()>;

    /// Insert a new entry stamped with the current local time and return its id
    fn create(&self, fields: &EntryFields) -> Result<i64>;

    /// All entries, ascending by id
    fn list(&self) -> Result<Vec<Entry>>;

    /// One entry by id, or `None`
    fn get(&self, id: i64) -> Result<Option<Entry>>;

    /// Overwrite the four mutable fields. `date` is left alone and a missing id is a no-op.
    fn update(&self, id: i64, fields: &EntryFields) -> Result<()>;

    /// Remove the entry. A missing id is a no-op.
    fn delete(&self, id: i64) -> Result<()>;
}
