//! Browser `localStorage` persistence for the session credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps hydrate-only web-sys glue out of `SessionStore`. The token is stored
//! as a raw string under `token` and the user copy as JSON under `user`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage quota or privacy-mode failures are
//! ignored, and SSR paths no-op so server rendering stays deterministic.

use crate::net::types::{Credential, User};
use crate::state::session_store::CredentialStorage;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `CredentialStorage` over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl CredentialStorage for LocalStorage {
    fn load_token(&self) -> Option<Credential> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            (!raw.is_empty()).then(|| Credential::new(raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, credential: &Credential, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, credential.token());
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, user);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}
