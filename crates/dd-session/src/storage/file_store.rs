//! JSON-file store for the durable scope.
//!
//! The file holds one JSON object mapping keys to string values. Every call
//! reads the file fresh and writes it back whole, so several processes
//! sharing a config directory observe each other's sign-ins.

use crate::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use error_location::ErrorLocation;
use log::warn;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all entries. A missing or blank file is an empty store.
    #[track_caller]
    fn read_entries(&self) -> StorageResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Entries to modify. This store is the only writer of its file, so an
    /// unreadable file is replaced rather than blocking every future write.
    fn entries_for_update(&self) -> StorageResult<Entries> {
        match self.read_entries() {
            Err(StorageError::Corrupt { path, source, .. }) => {
                warn!(
                    "Replacing unreadable storage file {}: {}",
                    path.display(),
                    source
                );
                Ok(Entries::new())
            }
            other => other,
        }
    }

    #[track_caller]
    fn write_entries(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| StorageError::Io {
                path: dir.to_path_buf(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let contents =
            serde_json::to_string_pretty(entries).map_err(|e| StorageError::Encoding {
                key: self.path.display().to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        std::fs::write(&self.path, contents).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn guard(&self) -> StorageResult<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| StorageError::Lock {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.guard()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.guard()?;
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.guard()?;
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
