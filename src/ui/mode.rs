use std::fmt;
use std::str::FromStr;

use crate::error::JournalError;

/// The four mutually exclusive views offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    AddEntry,
    ViewEntries,
    EditEntry,
    DeleteEntry,
}

impl Mode {
    /// Menu order
    pub const ALL: [Mode; 4] = [
        Mode::AddEntry,
        Mode::ViewEntries,
        Mode::EditEntry,
        Mode::DeleteEntry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::AddEntry => "Add Entry",
            Mode::ViewEntries => "View Entries",
            Mode::EditEntry => "Edit Entry",
            Mode::DeleteEntry => "Delete Entry",
        }
    }

    pub fn subheader(self) -> &'static str {
        match self {
            Mode::AddEntry => "Add a New Entry",
            Mode::ViewEntries => "All Entries",
            Mode::EditEntry => "Edit an Entry",
            Mode::DeleteEntry => "Delete an Entry",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a 1-based menu number or the label, ignoring case
impl FromStr for Mode {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        if let Ok(n) = choice.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|idx| Mode::ALL.get(idx).copied())
                .ok_or_else(|| JournalError::InvalidChoice(format!("no menu option {}", n)));
        }

        Mode::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(choice))
            .ok_or_else(|| JournalError::InvalidChoice(format!("unknown menu option '{}'", choice)))
    }
}
