use std::io::{self, BufRead, Write};

use tracing::info;

use super::console::Console;
use super::mode::Mode;
use super::{AHA_MOMENTS, QUESTIONS, TOPIC, WHAT_I_KNOW};
use crate::entry::Entry;
use crate::error::Result;
use crate::storage::JournalStore;

/// Outcome of one pass through a mode, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    NoEntries,
    Entries(Vec<Entry>),
    Added,
    Updated(i64),
    Deleted(i64),
    Cancelled,
}

impl Screen {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Screen::NoEntries => writeln!(out, "No entries found."),
            Screen::Entries(entries) => {
                for entry in entries {
                    render_entry(out, entry)?;
                }
                Ok(())
            }
            Screen::Added => writeln!(out, "Entry added successfully!"),
            Screen::Updated(_) => writeln!(out, "Entry updated successfully!"),
            Screen::Deleted(_) => writeln!(out, "Entry deleted successfully!"),
            Screen::Cancelled => writeln!(out, "Cancelled."),
        }
    }
}

fn render_entry<W: Write + ?Sized>(out: &mut W, entry: &Entry) -> io::Result<()> {
    writeln!(out, "Entry: {}", entry.id)?;
    writeln!(out, "Date: {}", entry.date)?;
    writeln!(out, "{}: {}", TOPIC, entry.topic)?;
    writeln!(out, "{}: {}", WHAT_I_KNOW, entry.what_i_know)?;
    writeln!(out, "{}: {}", QUESTIONS, entry.questions)?;
    writeln!(out, "{}: {}", AHA_MOMENTS, entry.aha_moments)?;
    writeln!(out, "---")
}

/// Print the mode's subheader and run its handler
pub fn run_mode<R: BufRead, W: Write>(
    mode: Mode,
    store: &dyn JournalStore,
    console: &mut Console<R, W>,
) -> Result<Screen> {
    writeln!(console.out(), "\n{}\n", mode.subheader())?;

    match mode {
        Mode::AddEntry => add_entry(store, console),
        Mode::ViewEntries => view_entries(store),
        Mode::EditEntry => edit_entry(store, console),
        Mode::DeleteEntry => delete_entry(store, console),
    }
}

pub fn add_entry<R: BufRead, W: Write>(
    store: &dyn JournalStore,
    console: &mut Console<R, W>,
) -> Result<Screen> {
    let Some(fields) = console.entry_form(None)? else {
        return Ok(Screen::Cancelled);
    };

    let id = store.create(&fields)?;
    info!(id, "entry added");
    Ok(Screen::Added)
}

pub fn view_entries(store: &dyn JournalStore) -> Result<Screen> {
    let entries = store.list()?;
    if entries.is_empty() {
        return Ok(Screen::NoEntries);
    }
    Ok(Screen::Entries(entries))
}

pub fn edit_entry<R: BufRead, W: Write>(
    store: &dyn JournalStore,
    console: &mut Console<R, W>,
) -> Result<Screen> {
    let entries = store.list()?;
    if entries.is_empty() {
        return Ok(Screen::NoEntries);
    }

    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    let Some(id) = console.select_id("Select an Entry to Edit", &ids)? else {
        return Ok(Screen::Cancelled);
    };
    let Some(entry) = entries.into_iter().find(|e| e.id == id) else {
        return Ok(Screen::Cancelled);
    };

    let Some(fields) = console.entry_form(Some(&entry.fields()))? else {
        return Ok(Screen::Cancelled);
    };

    store.update(id, &fields)?;
    info!(id, "entry updated");
    Ok(Screen::Updated(id))
}

pub fn delete_entry<R: BufRead, W: Write>(
    store: &dyn JournalStore,
    console: &mut Console<R, W>,
) -> Result<Screen> {
    let entries = store.list()?;
    if entries.is_empty() {
        return Ok(Screen::NoEntries);
    }

    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    let Some(id) = console.select_id("Select an Entry to Delete", &ids)? else {
        return Ok(Screen::Cancelled);
    };

    if console.confirm(&format!("Delete entry {}?", id))? != Some(true) {
        return Ok(Screen::Cancelled);
    }

    store.delete(id)?;
    info!(id, "entry deleted");
    Ok(Screen::Deleted(id))
}
