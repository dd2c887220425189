pub mod error;
pub mod session_manager;
pub mod session_record;
pub mod session_snapshot;
pub mod session_store;
pub mod storage;

pub use error::{Result, SessionError};
pub use session_manager::SessionManager;
pub use session_record::SessionRecord;
pub use session_snapshot::{SessionSnapshot, SessionState};
pub use session_store::{ScopedStore, SessionStore};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, REMEMBER_KEY, SESSION_KEY, StorageError,
    StorageResult, StorageScope,
};

#[cfg(test)]
mod tests;
