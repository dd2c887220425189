//! Key-value storage scopes backing the persisted session.
//!
//! Two independent stores take part: a durable one that survives restarts
//! and an ephemeral one that lives as long as the process. Both hold at most
//! one record under [`SESSION_KEY`]; the durable store also carries the
//! remember-preference flag under [`REMEMBER_KEY`].

mod file_store;
mod memory_store;
mod storage_error;
mod storage_scope;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use storage_error::{StorageError, StorageResult};
pub use storage_scope::StorageScope;

/// Key of the serialized session record.
pub const SESSION_KEY: &str = "demand_dashboard_auth";

/// Key of the remember-preference flag (durable scope only).
pub const REMEMBER_KEY: &str = "demand_dashboard_remember";

/// A string key-value store. Operations complete immediately.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
