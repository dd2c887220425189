use dd_core::Identity;

/// Lifecycle position of the session manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted record not yet checked
    Initializing,
    SignedOut,
    SignedIn,
}

/// What consumers observe: the current identity and whether work is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<Identity>,
    /// True until initialization finishes and while a sign-in or sign-up runs
    pub is_loading: bool,
    pub initialized: bool,
}

impl SessionSnapshot {
    pub(crate) fn initializing() -> Self {
        Self {
            user: None,
            is_loading: true,
            initialized: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn state(&self) -> SessionState {
        match (self.user.is_some(), self.initialized) {
            (true, _) => SessionState::SignedIn,
            (false, false) => SessionState::Initializing,
            (false, true) => SessionState::SignedOut,
        }
    }
}
