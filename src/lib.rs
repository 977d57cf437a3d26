pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod storage;
pub mod ui;

pub use entry::{Entry, EntryFields};
pub use error::{JournalError, Result};
pub use storage::{JournalStore, SqliteStore};
