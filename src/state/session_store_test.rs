use std::cell::RefCell;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::components::navbar::nav_links;
use crate::net::fake::FakeTransport;
use crate::net::http::Body;
use crate::net::types::Role;
use crate::state::session::SessionHandle;

#[derive(Default)]
struct MemoryStorage {
    saved: RefCell<Option<(Credential, User)>>,
}

impl MemoryStorage {
    fn holding(token: &str) -> Self {
        let storage = Self::default();
        storage.store(&Credential::new(token), &user(Role::Candidate));
        storage
    }

    fn token(&self) -> Option<String> {
        self.saved.borrow().as_ref().map(|(c, _)| c.token().to_owned())
    }
}

impl CredentialStorage for MemoryStorage {
    fn load_token(&self) -> Option<Credential> {
        self.saved.borrow().as_ref().map(|(c, _)| c.clone())
    }

    fn store(&self, credential: &Credential, user: &User) {
        *self.saved.borrow_mut() = Some((credential.clone(), user.clone()));
    }

    fn clear(&self) {
        *self.saved.borrow_mut() = None;
    }
}

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@x.io".to_owned(),
        role,
        resume_url: None,
        bookmarks: Vec::new(),
    }
}

fn new_store(fake: FakeTransport, storage: MemoryStorage) -> SessionStore<FakeTransport, MemoryStorage> {
    SessionStore::new(ApiClient::new("http://api", fake), storage)
}

const USER_JSON: &str = r#"{"_id":"u1","name":"Ada Lovelace","email":"ada@x.io","role":"candidate"}"#;

#[test]
fn login_persists_credential_and_sets_identity() {
    let body = format!(r#"{{"token":"t1","user":{USER_JSON}}}"#);
    let store = new_store(FakeTransport::reply(200, &body), MemoryStorage::default());

    let session = block_on(store.login("ada@x.io", "pw")).unwrap();

    assert_eq!(session.identity().map(|u| u.name.as_str()), Some("Ada Lovelace"));
    assert_eq!(session.credential().map(Credential::token), Some("t1"));
    assert!(!session.is_loading());
    assert_eq!(store.storage().token().as_deref(), Some("t1"));
}

#[test]
fn rejected_login_returns_server_message_verbatim() {
    let store = new_store(
        FakeTransport::reply(400, r#"{"message":"Invalid credentials"}"#),
        MemoryStorage::default(),
    );

    let err = block_on(store.login("ada@x.io", "wrong")).unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials("Invalid credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(store.storage().token(), None);
}

#[test]
fn rejected_login_without_message_uses_fallback() {
    let store = new_store(FakeTransport::reply(401, ""), MemoryStorage::default());
    let err = block_on(store.login("ada@x.io", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Login failed. Please check your credentials.");
}

#[test]
fn database_codes_map_to_database_unavailable() {
    for code in ["DATABASE_CONNECTION_ERROR", "DATABASE_TIMEOUT"] {
        let body = format!(r#"{{"message":"boom","error":"{code}"}}"#);
        let store = new_store(FakeTransport::reply(503, &body), MemoryStorage::default());
        assert_eq!(block_on(store.login("a", "b")), Err(AuthError::DatabaseUnavailable));
    }
}

#[test]
fn unreachable_backend_is_reported() {
    let store = new_store(FakeTransport::default(), MemoryStorage::default());
    assert_eq!(block_on(store.login("a", "b")), Err(AuthError::Unreachable));
}

#[test]
fn missing_token_is_an_error_for_both_flows() {
    let store = new_store(FakeTransport::reply(200, r#"{"user":null}"#), MemoryStorage::default());
    let err = block_on(store.login("a", "b")).unwrap_err();
    assert_eq!(err.to_string(), "Login failed: No token received");

    let store = new_store(FakeTransport::reply(200, "{}"), MemoryStorage::default());
    let form = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@x.io".to_owned(),
        password: "pw".to_owned(),
        role: Role::Recruiter,
    };
    let err = block_on(store.register(&form)).unwrap_err();
    assert_eq!(err.to_string(), "Registration failed: No token received");
}

#[test]
fn recruiter_registration_signs_in_and_offers_post_job() {
    Owner::new().with(|| {
        let body = r#"{"token":"t2","user":{"_id":"r1","name":"Grace Hopper","email":"grace@x.io","role":"recruiter"}}"#;
        let store = new_store(FakeTransport::reply(200, body), MemoryStorage::default());
        let handle = SessionHandle::new(Session::anonymous());
        let form = RegisterRequest {
            name: "Grace Hopper".to_owned(),
            email: "grace@x.io".to_owned(),
            password: "pw".to_owned(),
            role: Role::Recruiter,
        };

        block_on(handle.register(&store, &form)).unwrap();

        assert_eq!(store.storage().token().as_deref(), Some("t2"));
        let Body::Json(sent) = store.api().transport().last().body else { panic!("expected a JSON body") };
        assert!(sent.contains(r#""role":"recruiter""#));
        let labels: Vec<String> =
            nav_links(handle.identity_untracked().as_ref()).into_iter().map(|l| l.label).collect();
        assert!(labels.contains(&"Post Job".to_owned()));
        assert!(!labels.contains(&"Recommended".to_owned()));
    });
}

#[test]
fn register_failure_uses_register_fallback() {
    let store = new_store(FakeTransport::reply(500, "{}"), MemoryStorage::default());
    let form = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@x.io".to_owned(),
        password: "pw".to_owned(),
        role: Role::Candidate,
    };
    assert_eq!(block_on(store.register(&form)), Err(AuthError::Failed("Registration failed".to_owned())));
}

#[test]
fn token_without_user_fetches_identity() {
    let fake = FakeTransport::reply(200, r#"{"token":"t2"}"#);
    fake.push(200, USER_JSON);
    let store = new_store(fake, MemoryStorage::default());

    let session = block_on(store.login("ada@x.io", "pw")).unwrap();

    assert_eq!(session.role(), Some(Role::Candidate));
    let me = store.api().transport().last();
    assert_eq!(me.url, "http://api/auth/me");
    assert_eq!(me.authorization.as_deref(), Some("Bearer t2"));
}

#[test]
fn logout_clears_persisted_credential() {
    let store = new_store(FakeTransport::default(), MemoryStorage::holding("t1"));

    let session = store.logout();

    assert_eq!(session, Session::anonymous());
    assert_eq!(store.storage().token(), None);
}

#[test]
fn refresh_without_token_is_anonymous_and_offline() {
    let store = new_store(FakeTransport::default(), MemoryStorage::default());
    assert_eq!(block_on(store.refresh()), Session::anonymous());
    assert!(store.api().transport().requests().is_empty());
}

#[test]
fn refresh_restores_identity_from_valid_token() {
    let store = new_store(FakeTransport::reply(200, USER_JSON), MemoryStorage::holding("t1"));

    let session = block_on(store.refresh());

    assert_eq!(session.identity().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(session.credential().map(Credential::token), Some("t1"));
    assert_eq!(store.api().transport().last().authorization.as_deref(), Some("Bearer t1"));
}

#[test]
fn refresh_with_rejected_token_removes_it() {
    let store = new_store(FakeTransport::reply(401, r#"{"message":"Token expired"}"#), MemoryStorage::holding("stale"));

    let session = block_on(store.refresh());

    assert_eq!(session.identity(), None);
    assert_eq!(session.credential(), None);
    assert_eq!(store.storage().token(), None);
}
