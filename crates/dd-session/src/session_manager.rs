//! The session service: single owner of "who is signed in".
//!
//! Construct one at startup, call [`SessionManager::initialize`] once, and
//! hand it to whatever renders the session. Consumers either poll the
//! accessors or [`subscribe`](SessionManager::subscribe) to snapshots.
//!
//! Sign-in, sign-up and the password-recovery operations simulate network
//! latency with a fixed delay from [`SessionConfig`]. Validation runs after
//! the delay. No operation can be cancelled once started.

use crate::{
    Result as SessionErrorResult, SessionError, SessionRecord, SessionSnapshot, SessionState,
    SessionStore, StorageScope,
};

use dd_config::SessionConfig;
use dd_core::{Identity, IdentityUpdate};
use log::{debug, info, warn};
use tokio::sync::watch;

pub struct SessionManager {
    config: SessionConfig,
    store: SessionStore,
    state: watch::Sender<SessionSnapshot>,
}

impl SessionManager {
    /// New manager in the initializing state (loading, nobody signed in).
    pub fn new(config: SessionConfig, store: SessionStore) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initializing());
        Self {
            config,
            store,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().state()
    }

    /// Restore the persisted session, if any, from the effective scope.
    ///
    /// A record that fails to parse is deleted and the session starts signed
    /// out. Storage failures are logged and also start signed out.
    pub fn initialize(&self) {
        let user = match self.store.effective_scope() {
            Ok(scoped) => match scoped.read() {
                Ok(Some(record)) => {
                    info!(
                        "Restored session for {} from {} storage",
                        record.user.email,
                        scoped.scope()
                    );
                    Some(record.user)
                }
                Ok(None) => {
                    debug!("No persisted session in {} storage", scoped.scope());
                    None
                }
                Err(e @ SessionError::MalformedSessionRecord { .. }) => {
                    warn!("Discarding persisted session: {}", e);
                    if let Err(clear_err) = scoped.clear() {
                        warn!("Failed to remove malformed session record: {}", clear_err);
                    }
                    None
                }
                Err(e) => {
                    warn!("Failed to read persisted session: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to resolve session storage scope: {}", e);
                None
            }
        };

        self.state.send_modify(|snapshot| {
            snapshot.user = user;
            snapshot.is_loading = false;
            snapshot.initialized = true;
        });
    }

    /// Sign in with email and password.
    ///
    /// The record goes to durable storage when `remember_me` is set, to
    /// ephemeral storage otherwise, and is removed from the other scope.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> SessionErrorResult<Identity> {
        self.set_loading(true);
        let result = self.try_sign_in(email, password, remember_me).await;
        self.set_loading(false);
        result
    }

    async fn try_sign_in(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> SessionErrorResult<Identity> {
        tokio::time::sleep(self.config.sign_in_delay()).await;

        if !self.meets_password_policy(password) {
            debug!("Rejected sign-in for {}: password too short", email);
            return Err(SessionError::invalid_credentials());
        }

        let identity = Identity::for_sign_in(email, &self.config.avatar_base_url);
        let scope = StorageScope::for_remember(remember_me);

        // Write before flipping the flag so a failed write leaves the previous
        // session readable.
        self.store
            .scope(scope)
            .write(&SessionRecord::new(identity.clone()))?;
        self.store.set_remember(remember_me)?;
        self.store.scope(scope.other()).clear()?;

        self.set_user(Some(identity.clone()));
        info!("Signed in {} ({} storage)", email, scope);

        Ok(identity)
    }

    /// Register a new account. The session is always ephemeral.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> SessionErrorResult<Identity> {
        self.set_loading(true);
        let result = self.try_sign_up(email, password, name).await;
        self.set_loading(false);
        result
    }

    async fn try_sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> SessionErrorResult<Identity> {
        tokio::time::sleep(self.config.sign_up_delay()).await;

        if !self.meets_password_policy(password) {
            return Err(SessionError::weak_password(self.config.min_password_length));
        }

        let identity = Identity::for_sign_up(email, name, &self.config.avatar_base_url);

        self.store
            .scope(StorageScope::Ephemeral)
            .write(&SessionRecord::new(identity.clone()))?;
        self.store.set_remember(false)?;
        self.store.scope(StorageScope::Durable).clear()?;

        self.set_user(Some(identity.clone()));
        info!("Signed up {}", email);

        Ok(identity)
    }

    /// Forget the current identity and wipe both scopes. Never fails.
    pub fn sign_out(&self) {
        if let Err(e) = self.store.clear_all() {
            warn!("Failed to clear persisted session: {}", e);
        }

        self.set_user(None);
        info!("Signed out");
    }

    /// Merge `update` into the current identity and persist it to the scope
    /// that currently holds the record.
    ///
    /// Returns `Ok(None)` without touching anything when nobody is signed in.
    /// An empty update returns the current identity without writing.
    pub fn update_profile(&self, update: IdentityUpdate) -> SessionErrorResult<Option<Identity>> {
        let Some(mut identity) = self.current_user() else {
            debug!("Ignoring profile update: not signed in");
            return Ok(None);
        };

        if update.is_empty() {
            debug!("Ignoring empty profile update for {}", identity.email);
            return Ok(Some(identity));
        }

        identity.apply(update);

        let scoped = self.store.effective_scope()?;
        scoped.write(&SessionRecord::new(identity.clone()))?;

        self.set_user(Some(identity.clone()));
        debug!("Updated profile for {} ({} storage)", identity.email, scoped.scope());

        Ok(Some(identity))
    }

    /// Request a password reset email. Dispatching it is somebody else's job.
    pub async fn forgot_password(&self, email: &str) {
        tokio::time::sleep(self.config.recovery_delay()).await;
        info!("Password reset email requested for {}", email);
    }

    /// Set a new password using a reset token.
    ///
    /// The token is not checked against anything; only the password length is.
    /// Does not sign anybody in.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> SessionErrorResult<()> {
        tokio::time::sleep(self.config.recovery_delay()).await;

        if !self.meets_password_policy(new_password) {
            return Err(SessionError::weak_password(self.config.min_password_length));
        }

        info!("Password reset accepted ({} character token)", token.len());
        Ok(())
    }

    /// Confirm an email address. The token is not checked against anything.
    pub async fn verify_email(&self, token: &str) {
        tokio::time::sleep(self.config.recovery_delay()).await;
        info!("Email verification accepted ({} character token)", token.len());
    }

    fn meets_password_policy(&self, password: &str) -> bool {
        password.chars().count() >= self.config.min_password_length
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_if_modified(|snapshot| {
            let changed = snapshot.is_loading != loading;
            snapshot.is_loading = loading;
            changed
        });
    }

    fn set_user(&self, user: Option<Identity>) {
        self.state.send_modify(|snapshot| snapshot.user = user);
    }
}
