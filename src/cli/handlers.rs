use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::entry::EntryFields;
use crate::error::{JournalError, Result};
use crate::storage::{JournalStore, SqliteStore};
use crate::ui::{run_menu, view_entries, Console, Screen};

/// Open the journal and make sure its table exists
fn open_store(db: &Path) -> Result<SqliteStore> {
    debug!(db = %db.display(), "opening journal");
    SqliteStore::open(db)
}

fn print_screen(screen: &Screen) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    screen.render(&mut out)?;
    out.flush()?;
    Ok(())
}

pub fn handle_menu(db: &Path) -> Result<()> {
    let store = open_store(db)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_menu(&store, &mut console)
}

pub fn handle_add(
    db: &Path,
    topic: String,
    know: String,
    questions: String,
    aha: String,
) -> Result<()> {
    let store = open_store(db)?;

    let id = store.create(&EntryFields::new(topic, know, questions, aha))?;
    info!(id, "entry added");

    print_screen(&Screen::Added)
}

pub fn handle_view(db: &Path) -> Result<()> {
    let store = open_store(db)?;
    print_screen(&view_entries(&store)?)
}

pub fn handle_edit(
    db: &Path,
    id: i64,
    topic: Option<String>,
    know: Option<String>,
    questions: Option<String>,
    aha: Option<String>,
) -> Result<()> {
    let store = open_store(db)?;

    // A missing id falls through to the storage no-op
    let current = store.get(id)?.map(|e| e.fields()).unwrap_or_default();
    let fields = EntryFields {
        topic: topic.unwrap_or(current.topic),
        what_i_know: know.unwrap_or(current.what_i_know),
        questions: questions.unwrap_or(current.questions),
        aha_moments: aha.unwrap_or(current.aha_moments),
    };

    store.update(id, &fields)?;
    info!(id, "entry updated");

    print_screen(&Screen::Updated(id))
}

pub fn handle_delete(db: &Path, id: i64, force: bool) -> Result<()> {
    let store = open_store(db)?;

    // Confirm deletion unless --force is used
    if !force {
        match store.get(id)? {
            Some(entry) => eprint!(
                "Delete entry {} ({}) - {}? [y/N] ",
                entry.id, entry.date, entry.topic
            ),
            None => eprint!("Delete entry {}? [y/N] ", id),
        }

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                return print_screen(&Screen::Cancelled);
            }
        } else {
            eprintln!();
            return Err(JournalError::ConfirmationRequired);
        }
    }

    store.delete(id)?;
    info!(id, "entry deleted");

    print_screen(&Screen::Deleted(id))
}
