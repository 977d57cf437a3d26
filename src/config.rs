use std::path::PathBuf;

/// Database file used when neither `--db` nor the env var is set
pub const DEFAULT_DB_FILE: &str = "learning_app.db";

/// Environment variable consulted for the database path
pub const DB_ENV_VAR: &str = "LEARNING_JOURNAL_DB";

pub fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

/// Resolve the database path. Blank values fall back to the default.
pub fn resolve_database_path(flag: Option<PathBuf>) -> PathBuf {
    flag.filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(default_database_path)
}
