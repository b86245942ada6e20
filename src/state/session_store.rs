//! Login, registration, logout and startup restore of the user session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` owns the two side effects of authentication: the backend
//! calls and the persisted credential. It never touches reactive state; it
//! returns a fresh `Session` value and `SessionHandle` publishes it.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` map `ApiError` into `AuthError`, whose `Display`
//! text is exactly what the form shows. `logout` and `refresh` cannot fail:
//! the worst case is an anonymous session.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{AuthResponse, Credential, LoginRequest, RegisterRequest, User};
use crate::state::session::Session;

const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Backend error codes that mean the database, not the user, is at fault.
const DATABASE_CODES: [&str; 2] = ["DATABASE_CONNECTION_ERROR", "DATABASE_TIMEOUT"];

/// Durable storage for the credential and a copy of the user record.
pub trait CredentialStorage {
    /// The persisted credential, if any.
    fn load_token(&self) -> Option<Credential>;
    /// Persist `credential` together with a copy of `user`.
    fn store(&self, credential: &Credential, user: &User);
    /// Remove both the credential and the user copy.
    fn clear(&self);
}

/// Why a login or registration did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Network error: Cannot connect to server. Make sure the backend is running.")]
    Unreachable,
    #[error("Database connection failed. Please try again later.")]
    DatabaseUnavailable,
    /// Login rejected; carries the server's message verbatim.
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    Failed(String),
    #[error("{0}")]
    MissingToken(&'static str),
}

#[derive(Clone, Copy)]
enum Flow {
    Login,
    Register,
}

impl Flow {
    const fn fallback(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FALLBACK,
            Self::Register => REGISTER_FALLBACK,
        }
    }

    const fn missing_token(self) -> &'static str {
        match self {
            Self::Login => "Login failed: No token received",
            Self::Register => "Registration failed: No token received",
        }
    }
}

fn classify(flow: Flow, err: &ApiError) -> AuthError {
    if err.is_unreachable() {
        return AuthError::Unreachable;
    }
    if err.code().is_some_and(|code| DATABASE_CODES.contains(&code)) {
        return AuthError::DatabaseUnavailable;
    }
    let message = err.user_message(flow.fallback());
    match (flow, err) {
        (Flow::Login, ApiError::Unauthorized { .. } | ApiError::Rejected { .. }) => {
            AuthError::InvalidCredentials(message)
        }
        _ => AuthError::Failed(message),
    }
}

/// Authentication workflows over an `ApiClient` and a `CredentialStorage`.
#[derive(Clone, Debug)]
pub struct SessionStore<T, S> {
    api: ApiClient<T>,
    storage: S,
}

impl<T: Transport, S: CredentialStorage> SessionStore<T, S> {
    pub fn new(api: ApiClient<T>, storage: S) -> Self {
        Self { api, storage }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Exchange email and password for an authenticated session.
    ///
    /// # Errors
    ///
    /// See `AuthError`; the persisted credential is untouched on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = self.api.login(&request).await.map_err(|e| classify(Flow::Login, &e))?;
        self.establish(Flow::Login, response).await
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// See `AuthError`; the persisted credential is untouched on failure.
    pub async fn register(&self, form: &RegisterRequest) -> Result<Session, AuthError> {
        let response = self.api.register(form).await.map_err(|e| classify(Flow::Register, &e))?;
        self.establish(Flow::Register, response).await
    }

    async fn establish(&self, flow: Flow, response: AuthResponse) -> Result<Session, AuthError> {
        let token = response.token.filter(|t| !t.is_empty()).ok_or(AuthError::MissingToken(flow.missing_token()))?;
        let credential = Credential::new(token);
        let user = match response.user {
            Some(user) => user,
            None => self.api.fetch_me(&credential).await.map_err(|e| classify(flow, &e))?,
        };
        self.storage.store(&credential, &user);
        Ok(Session::authenticated(credential, user))
    }

    /// Forget the persisted credential and return the anonymous session.
    pub fn logout(&self) -> Session {
        self.storage.clear();
        Session::anonymous()
    }

    /// Rebuild the session from the persisted credential.
    ///
    /// A credential the backend no longer accepts (or any other failure) is
    /// removed from storage so identity and credential stay in lockstep.
    pub async fn refresh(&self) -> Session {
        let Some(credential) = self.storage.load_token() else {
            return Session::anonymous();
        };
        match self.api.fetch_me(&credential).await {
            Ok(user) => {
                self.storage.store(&credential, &user);
                Session::authenticated(credential, user)
            }
            Err(err) => {
                leptos::logging::warn!("session restore failed: {err}");
                self.storage.clear();
                Session::anonymous()
            }
        }
    }
}
