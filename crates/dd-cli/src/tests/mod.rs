mod runner;
mod shell;

use dd_config::SessionConfig;
use dd_session::{SessionManager, SessionStore};

/// Initialized manager over in-memory scopes, no simulated latency.
pub(crate) fn test_manager() -> SessionManager {
    let manager = SessionManager::new(SessionConfig::without_latency(), SessionStore::in_memory());
    manager.initialize();
    manager
}
