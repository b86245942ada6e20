//! Reactive session shared by the shell, the route guard and every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `SessionHandle` via context. Screens read identity and
//! credential through it; only its methods write, so identity and credential
//! always change together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{Credential, RegisterRequest, Role, User};
use crate::state::session_store::{AuthError, CredentialStorage, SessionStore};

/// Current identity and the credential proving it.
///
/// Fields are private: a session is either anonymous (neither set) or
/// authenticated (both set), plus a loading flag used during startup restore.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    identity: Option<User>,
    credential: Option<Credential>,
    loading: bool,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Startup placeholder while the persisted credential is being checked.
    #[must_use]
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn authenticated(credential: Credential, user: User) -> Self {
        Self { identity: Some(user), credential: Some(credential), loading: false }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.role() == Some(Role::Candidate)
    }
}

/// Single writer of the reactive session.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle(RwSignal<Session>);

impl SessionHandle {
    #[must_use]
    pub fn new(initial: Session) -> Self {
        Self(RwSignal::new(initial))
    }

    /// Tracked snapshot.
    #[must_use]
    pub fn get(&self) -> Session {
        self.0.get()
    }

    /// Tracked borrow.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.0.with(f)
    }

    /// Tracked identity clone.
    #[must_use]
    pub fn identity(&self) -> Option<User> {
        self.0.with(|s| s.identity().cloned())
    }

    /// Credential for an outgoing call; does not subscribe the caller.
    #[must_use]
    pub fn credential_untracked(&self) -> Option<Credential> {
        self.0.with_untracked(|s| s.credential().cloned())
    }

    /// Identity without subscribing the caller.
    #[must_use]
    pub fn identity_untracked(&self) -> Option<User> {
        self.0.with_untracked(|s| s.identity().cloned())
    }

    /// Sign in; the session is only replaced on success.
    ///
    /// # Errors
    ///
    /// Forwards the store's `AuthError`.
    pub async fn login<T, S>(&self, store: &SessionStore<T, S>, email: &str, password: &str) -> Result<(), AuthError>
    where
        T: Transport,
        S: CredentialStorage,
    {
        let session = store.login(email, password).await?;
        self.0.set(session);
        Ok(())
    }

    /// Register and sign in.
    ///
    /// # Errors
    ///
    /// Forwards the store's `AuthError`.
    pub async fn register<T, S>(&self, store: &SessionStore<T, S>, form: &RegisterRequest) -> Result<(), AuthError>
    where
        T: Transport,
        S: CredentialStorage,
    {
        let session = store.register(form).await?;
        self.0.set(session);
        Ok(())
    }

    pub fn logout<T, S>(&self, store: &SessionStore<T, S>)
    where
        T: Transport,
        S: CredentialStorage,
    {
        self.0.set(store.logout());
    }

    /// Re-read identity from the backend (startup and after profile changes).
    pub async fn refresh<T, S>(&self, store: &SessionStore<T, S>)
    where
        T: Transport,
        S: CredentialStorage,
    {
        let session = store.refresh().await;
        self.0.set(session);
    }

    /// Log out when `err` says the credential was rejected.
    ///
    /// Returns `true` when the session was cleared.
    pub fn expire_if_unauthorized<T, S>(&self, store: &SessionStore<T, S>, err: &ApiError) -> bool
    where
        T: Transport,
        S: CredentialStorage,
    {
        if !err.is_unauthorized() || self.0.with_untracked(|s| s.credential().is_none()) {
            return false;
        }
        leptos::logging::warn!("credential rejected; signing out");
        self.logout(store);
        true
    }
}
