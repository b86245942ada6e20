use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::api::ApiClient;
use crate::net::fake::FakeTransport;

struct NoStorage;

impl CredentialStorage for NoStorage {
    fn load_token(&self) -> Option<Credential> {
        None
    }

    fn store(&self, _credential: &Credential, _user: &User) {}

    fn clear(&self) {}
}

fn recruiter() -> User {
    User {
        id: "r1".to_owned(),
        name: "Grace Hopper".to_owned(),
        email: "grace@x.io".to_owned(),
        role: Role::Recruiter,
        resume_url: None,
        bookmarks: Vec::new(),
    }
}

#[test]
fn anonymous_session_has_neither_identity_nor_credential() {
    let session = Session::anonymous();
    assert_eq!(session.identity(), None);
    assert_eq!(session.credential(), None);
    assert!(!session.is_loading());
}

#[test]
fn restoring_session_is_loading() {
    assert!(Session::restoring().is_loading());
    assert_eq!(Session::restoring().role(), None);
}

#[test]
fn authenticated_session_carries_both() {
    let session = Session::authenticated(Credential::new("t"), recruiter());
    assert_eq!(session.role(), Some(Role::Recruiter));
    assert!(!session.is_candidate());
    assert!(session.credential().is_some());
}

#[test]
fn handle_login_publishes_session() {
    Owner::new().with(|| {
        let body = r#"{"token":"t9","user":{"_id":"r1","name":"Grace Hopper","email":"grace@x.io","role":"recruiter"}}"#;
        let store = SessionStore::new(ApiClient::new("http://api", FakeTransport::reply(200, body)), NoStorage);
        let handle = SessionHandle::new(Session::anonymous());

        block_on(handle.login(&store, "grace@x.io", "pw")).unwrap();

        assert_eq!(handle.identity_untracked().map(|u| u.role), Some(Role::Recruiter));
        assert_eq!(handle.credential_untracked().map(|c| c.token().to_owned()).as_deref(), Some("t9"));
    });
}

#[test]
fn handle_login_failure_keeps_previous_session() {
    Owner::new().with(|| {
        let store = SessionStore::new(ApiClient::new("http://api", FakeTransport::reply(400, "{}")), NoStorage);
        let handle = SessionHandle::new(Session::anonymous());

        assert!(block_on(handle.login(&store, "a", "b")).is_err());
        assert_eq!(handle.identity_untracked(), None);
    });
}

#[test]
fn unauthorized_error_expires_session() {
    Owner::new().with(|| {
        let store = SessionStore::new(ApiClient::new("http://api", FakeTransport::default()), NoStorage);
        let handle = SessionHandle::new(Session::authenticated(Credential::new("t"), recruiter()));

        let rejected = ApiError::Rejected { status: 403, message: None, code: None };
        assert!(!handle.expire_if_unauthorized(&store, &rejected));
        assert!(handle.identity_untracked().is_some());

        let expired = ApiError::Unauthorized { message: None };
        assert!(handle.expire_if_unauthorized(&store, &expired));
        assert_eq!(handle.identity_untracked(), None);
        assert_eq!(handle.credential_untracked(), None);
    });
}
