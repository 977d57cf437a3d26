use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use chrono::NaiveDateTime;
use learning_journal::entry::DATE_FORMAT;
use learning_journal::{EntryFields, JournalStore, SqliteStore};
use tempfile::TempDir;

fn journal_cmd(db: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_learning-journal"));
    cmd.arg("--db").arg(db).env_remove("RUST_LOG");
    cmd
}

fn db_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("learning_app.db")
}

fn run_menu(db: &Path, input: &str) -> Output {
    let mut child = journal_cmd(db)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_view_on_fresh_database() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);

    let output = journal_cmd(&db).args(["view"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "No entries found.\n");
    assert!(db.exists());
}

#[test]
fn test_database_path_from_env() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("from-env.db");

    let output = Command::new(env!("CARGO_BIN_EXE_learning-journal"))
        .env("LEARNING_JOURNAL_DB", &db)
        .args(["add", "Env"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let store = SqliteStore::new(&db);
    assert_eq!(store.list().unwrap()[0].topic, "Env");
}

#[test]
fn test_end_to_end_add_update_delete() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);

    let output = journal_cmd(&db)
        .args([
            "add",
            "Recursion",
            "--know=base case + recursive case",
            "--questions=how deep can it go?",
            "--aha=it's just a stack",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Entry added successfully!"));

    let store = SqliteStore::new(&db);
    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    let created = entries[0].clone();
    assert_eq!(
        created.fields(),
        EntryFields::new(
            "Recursion",
            "base case + recursive case",
            "how deep can it go?",
            "it's just a stack"
        )
    );
    assert!(NaiveDateTime::parse_from_str(&created.date, DATE_FORMAT).is_ok());

    let id = created.id.to_string();
    let output = journal_cmd(&db)
        .args([
            "edit",
            &id,
            "--topic=Recursion",
            "--know=base+recursive case; tail calls",
            "--questions=",
            "--aha=stack frames are the key",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Entry updated successfully!"));

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].fields(),
        EntryFields::new(
            "Recursion",
            "base+recursive case; tail calls",
            "",
            "stack frames are the key"
        )
    );
    assert_eq!(entries[0].date, created.date);

    let output = journal_cmd(&db)
        .args(["delete", &id, "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Entry deleted successfully!"));

    assert!(store.list().unwrap().is_empty());

    let output = journal_cmd(&db).args(["view"]).output().unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("No entries found."));
}

#[test]
fn test_edit_keeps_omitted_fields() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);
    let store = SqliteStore::open(&db).unwrap();
    let id = store
        .create(&EntryFields::new("Traits", "coherence", "orphan rule?", ""))
        .unwrap();

    let output = journal_cmd(&db)
        .args(["edit", &id.to_string(), "--aha=newtype wrapper"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entry = store.get(id).unwrap().unwrap();
    assert_eq!(
        entry.fields(),
        EntryFields::new("Traits", "coherence", "orphan rule?", "newtype wrapper")
    );
}

#[test]
fn test_edit_and_delete_unknown_id_are_noops() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);
    let store = SqliteStore::open(&db).unwrap();
    store
        .create(&EntryFields::new("Traits", "coherence", "", ""))
        .unwrap();
    let before = store.list().unwrap();

    let output = journal_cmd(&db)
        .args(["edit", "42", "--topic=x"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Entry updated successfully!"));
    assert!(output.stderr.is_empty());

    let output = journal_cmd(&db)
        .args(["delete", "42", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Entry deleted successfully!"));
    assert!(output.stderr.is_empty());

    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn test_delete_without_force_when_piped_fails() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);
    let store = SqliteStore::open(&db).unwrap();
    let id = store.create(&EntryFields::new("keep", "", "", "")).unwrap();

    let output = journal_cmd(&db)
        .args(["delete", &id.to_string()])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_menu_session() {
    let tmp = TempDir::new().unwrap();
    let db = db_path(&tmp);

    let input = concat!(
        "2\n",
        "1\n",
        "Recursion\n",
        "base case + recursive case\n\nthen it unwinds\n.\n",
        "how deep can it go?\n.\n",
        "it's just a stack\n.\n",
        "2\n",
        "3\n",
        "\n",
        "\n",
        "base+recursive case; tail calls\n.\n",
        "-\n.\n",
        "stack frames are the key\n.\n",
        "view entries\n",
        "4\n",
        "\n",
        "y\n",
        "2\n",
    );
    let output = run_menu(&db, input);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Learning Journal App"));
    assert_eq!(stdout.matches("No entries found.").count(), 2);
    assert!(stdout.contains("Entry added successfully!"));
    assert!(stdout.contains(
        "What I Know for Sure: base case + recursive case\n\nthen it unwinds\n"
    ));
    assert!(stdout.contains("Questions That I Have: how deep can it go?\n"));
    assert!(stdout.contains("Entry updated successfully!"));
    assert!(stdout.contains("What I Know for Sure: base+recursive case; tail calls"));
    assert!(stdout.contains("Questions That I Have: \n"));
    assert!(stdout.contains("Ah-Ha Moments: stack frames are the key"));
    assert!(stdout.contains("Entry deleted successfully!"));
    assert!(stdout.ends_with("Goodbye!\n"));

    assert!(SqliteStore::new(&db).list().unwrap().is_empty());
}

#[test]
fn test_storage_failure_is_reported() {
    let tmp = TempDir::new().unwrap();

    let output = journal_cmd(tmp.path()).args(["view"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Storage error"));
}
