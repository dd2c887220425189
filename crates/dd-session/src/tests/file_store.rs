use crate::{FileStore, KeyValueStore, StorageError};

use tempfile::TempDir;

#[test]
fn given_missing_file_when_get_then_returns_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("session.json"));

    assert_eq!(store.get("key").unwrap().as_deref(), None);
    assert!(!store.path().exists());
}

#[test]
fn given_value_set_when_read_by_new_store_then_value_survives() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    FileStore::new(&path).set("key", "value").unwrap();
    let reopened = FileStore::new(&path);

    assert_eq!(reopened.get("key").unwrap().as_deref(), Some("value"));
}

#[test]
fn given_nested_path_when_set_then_parent_dirs_are_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("auth").join("session.json");
    let store = FileStore::new(&path);

    store.set("key", "value").unwrap();

    assert!(path.exists());
}

#[test]
fn given_two_keys_when_one_removed_then_other_remains() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("session.json"));
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    store.remove("a").unwrap();

    assert_eq!(store.get("a").unwrap().as_deref(), None);
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn given_missing_file_when_remove_then_file_is_not_created() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("session.json"));

    store.remove("key").unwrap();

    assert!(!store.path().exists());
}

#[test]
fn given_blank_file_when_get_then_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "  \n").unwrap();

    assert_eq!(FileStore::new(&path).get("key").unwrap().as_deref(), None);
}

#[test]
fn given_garbage_file_when_get_then_returns_corrupt_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let result = FileStore::new(&path).get("key");

    assert!(matches!(result, Err(StorageError::Corrupt { .. })));
}

#[test]
fn given_garbage_file_when_set_then_file_is_replaced() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    let store = FileStore::new(&path);

    store.set("key", "value").unwrap();

    assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
}
