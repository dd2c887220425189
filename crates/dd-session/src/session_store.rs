//! Scope selection for the persisted session.
//!
//! Which store is authoritative depends on the remember-preference flag in
//! the durable store. [`SessionStore::effective_scope`] resolves that once
//! and hands back a [`ScopedStore`], so callers never repeat the check.

use crate::{
    KeyValueStore, MemoryStore, REMEMBER_KEY, Result as SessionErrorResult, SESSION_KEY,
    SessionError, SessionRecord, StorageResult, StorageScope,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

const REMEMBER_VALUE: &str = "true";

#[derive(Clone)]
pub struct SessionStore {
    durable: Arc<dyn KeyValueStore>,
    ephemeral: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(durable: Arc<dyn KeyValueStore>, ephemeral: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, ephemeral }
    }

    /// Both scopes in memory. Nothing survives the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    pub fn is_remembered(&self) -> StorageResult<bool> {
        Ok(self.durable.get(REMEMBER_KEY)?.as_deref() == Some(REMEMBER_VALUE))
    }

    pub fn set_remember(&self, remember: bool) -> StorageResult<()> {
        if remember {
            self.durable.set(REMEMBER_KEY, REMEMBER_VALUE)
        } else {
            self.durable.remove(REMEMBER_KEY)
        }
    }

    /// The scope that currently holds the authoritative record.
    pub fn effective_scope(&self) -> StorageResult<ScopedStore<'_>> {
        let scope = StorageScope::for_remember(self.is_remembered()?);
        Ok(self.scope(scope))
    }

    pub fn scope(&self, scope: StorageScope) -> ScopedStore<'_> {
        let store = match scope {
            StorageScope::Durable => self.durable.as_ref(),
            StorageScope::Ephemeral => self.ephemeral.as_ref(),
        };
        ScopedStore { scope, store }
    }

    /// Remove the record from both scopes along with the remember flag.
    ///
    /// Every removal is attempted; the first failure is returned.
    pub fn clear_all(&self) -> StorageResult<()> {
        let results = [
            self.durable.remove(SESSION_KEY),
            self.durable.remove(REMEMBER_KEY),
            self.ephemeral.remove(SESSION_KEY),
        ];
        results.into_iter().collect()
    }
}

/// Record access bound to a single scope.
pub struct ScopedStore<'a> {
    scope: StorageScope,
    store: &'a dyn KeyValueStore,
}

impl ScopedStore<'_> {
    pub fn scope(&self) -> StorageScope {
        self.scope
    }

    /// The stored record, `None` if absent.
    #[track_caller]
    pub fn read(&self) -> SessionErrorResult<Option<SessionRecord>> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };

        SessionRecord::decode(&raw)
            .map(Some)
            .map_err(|e| SessionError::MalformedSessionRecord {
                scope: self.scope,
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn write(&self, record: &SessionRecord) -> StorageResult<()> {
        self.store.set(SESSION_KEY, &record.encode()?)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove(SESSION_KEY)
    }
}
