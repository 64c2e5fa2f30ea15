//! Integration tests for the file-backed store.
//!
//! Each test works in its own directory under the system temp dir so the
//! tests can run in parallel without stepping on each other's files.

use std::fs;
use std::path::PathBuf;

use vitastore_storage::{FileStore, KeyValueStore, StorageError, LANGUAGE_KEY, SESSION_KEY};

/// Returns a fresh, empty directory unique to this test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("vitastore-storage-tests")
        .join(format!("{test}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

#[test]
fn test_open_missing_file_is_empty() {
    let dir = scratch_dir("open-missing");
    let store = FileStore::open(dir.join("storage.json")).expect("should open");

    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    assert!(!store.path().exists(), "nothing written yet");
}

#[test]
fn test_values_survive_reopen() {
    // Simulates a restart: a second FileStore over the same file sees
    // everything the first one wrote.
    let dir = scratch_dir("reopen");
    let path = dir.join("storage.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set(LANGUAGE_KEY, "en").unwrap();
        store.set(SESSION_KEY, r#"{"id":"1"}"#).unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    assert_eq!(
        reopened.get(SESSION_KEY).unwrap().as_deref(),
        Some(r#"{"id":"1"}"#)
    );
}

#[test]
fn test_remove_is_persisted() {
    let dir = scratch_dir("remove");
    let path = dir.join("storage.json");

    let store = FileStore::open(&path).unwrap();
    store.set(SESSION_KEY, "{}").unwrap();
    store.remove(SESSION_KEY).unwrap();
    // Removing twice is fine.
    store.remove(SESSION_KEY).unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(SESSION_KEY).unwrap(), None);
}

#[test]
fn test_open_creates_parent_directories_on_write() {
    let dir = scratch_dir("nested");
    let path = dir.join("a").join("b").join("storage.json");

    let store = FileStore::open(&path).unwrap();
    store.set(LANGUAGE_KEY, "es").unwrap();

    assert!(path.exists());
}

#[test]
fn test_open_corrupt_file_returns_decode_error() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("storage.json");
    fs::write(&path, "this is not json").unwrap();

    let result = FileStore::open(&path);

    assert!(
        matches!(result, Err(StorageError::Decode(_))),
        "corrupt file should be a decode error"
    );
}

#[test]
fn test_open_blank_file_is_empty() {
    let dir = scratch_dir("blank");
    let path = dir.join("storage.json");
    fs::write(&path, "\n").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
}
