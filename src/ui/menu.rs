use std::io::{BufRead, Write};

use tracing::warn;

use super::console::Console;
use super::mode::Mode;
use super::screens::run_mode;
use crate::error::Result;
use crate::storage::JournalStore;

pub const TITLE: &str = "Learning Journal App";

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nMenu")?;
    for (n, mode) in Mode::ALL.iter().enumerate() {
        writeln!(out, "  {}) {}", n + 1, mode)?;
    }
    writeln!(out, "  q) Quit")
}

/// Interactive loop: one mode per cycle until the user quits or input ends.
///
/// Nothing is carried between cycles; every mode re-reads the store.
pub fn run_menu<R: BufRead, W: Write>(
    store: &dyn JournalStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    writeln!(console.out(), "{}", TITLE)?;

    loop {
        print_menu(console.out())?;
        let Some(choice) = console.prompt("Choose")? else {
            break;
        };
        let choice = choice.trim();
        if choice.is_empty() {
            continue;
        }
        if QUIT_WORDS.iter().any(|w| w.eq_ignore_ascii_case(choice)) {
            break;
        }

        let mode = match choice.parse::<Mode>() {
            Ok(mode) => mode,
            Err(e) => {
                warn!(choice, "unrecognized menu choice");
                writeln!(console.out(), "{}", e)?;
                continue;
            }
        };

        let screen = run_mode(mode, store, console)?;
        screen.render(console.out())?;
    }

    writeln!(console.out(), "Goodbye!")?;
    Ok(())
}
