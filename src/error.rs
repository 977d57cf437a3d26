use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Refusing to delete without confirmation. Use --force in non-interactive mode.")]
    ConfirmationRequired,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;
