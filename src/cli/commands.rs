use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DB_ENV_VAR;

#[derive(Parser, Debug)]
#[command(name = "learning-journal")]
#[command(version, about = "Record what you learn: topics, facts, questions and ah-ha moments")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(long, global = true, env = DB_ENV_VAR, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (Add / View / Edit / Delete)
    Menu,

    /// Add a new entry
    Add {
        /// What the entry is about
        topic: String,

        /// What I know for sure
        #[arg(long, default_value = "")]
        know: String,

        /// Questions that I have
        #[arg(long, default_value = "")]
        questions: String,

        /// Ah-ha moments
        #[arg(long, default_value = "")]
        aha: String,
    },

    /// Show all entries
    View,

    /// Edit an entry; omitted fields keep their current value
    Edit {
        /// Entry ID
        id: i64,

        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        know: Option<String>,

        #[arg(long)]
        questions: Option<String>,

        #[arg(long)]
        aha: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}
