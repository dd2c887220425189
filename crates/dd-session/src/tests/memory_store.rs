use crate::{KeyValueStore, MemoryStore};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_value_set_when_get_then_returns_it() {
    let store = MemoryStore::new();

    store.set("key", "value").unwrap();

    assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    assert_eq!(store.get("other").unwrap().as_deref(), None);
}

#[test]
fn given_missing_key_when_removed_then_ok() {
    let store = MemoryStore::new();

    assert!(store.remove("missing").is_ok());
    assert!(store.is_empty().unwrap());
}

#[test]
fn given_cloned_store_when_written_then_both_handles_see_it() {
    let store = MemoryStore::new();
    let shared = store.clone();

    shared.set("key", "value").unwrap();

    assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    assert_that!(shared.is_empty().unwrap(), eq(false));
}
