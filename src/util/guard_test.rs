use super::*;
use crate::net::types::{Credential, User};

fn signed_in(role: Role) -> Session {
    let user = User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@x.io".to_owned(),
        role,
        resume_url: None,
        bookmarks: Vec::new(),
    };
    Session::authenticated(Credential::new("t"), user)
}

#[test]
fn restoring_session_is_pending() {
    assert_eq!(decide(&Session::restoring(), &[Role::Admin]), GuardDecision::Pending);
}

#[test]
fn anonymous_is_sent_to_login() {
    assert_eq!(decide(&Session::anonymous(), &[]), GuardDecision::RedirectToLogin);
    assert_eq!(decide(&Session::anonymous(), &[Role::Admin]), GuardDecision::RedirectToLogin);
}

#[test]
fn empty_allow_list_admits_any_role() {
    for role in [Role::Candidate, Role::Recruiter, Role::Admin] {
        assert_eq!(decide(&signed_in(role), &[]), GuardDecision::Allow);
    }
}

#[test]
fn wrong_role_is_forbidden() {
    assert_eq!(decide(&signed_in(Role::Candidate), &[Role::Admin]), GuardDecision::Forbidden);
    assert_eq!(
        decide(&signed_in(Role::Candidate), &[Role::Recruiter, Role::Admin]),
        GuardDecision::Forbidden
    );
}

#[test]
fn listed_role_is_allowed() {
    assert_eq!(decide(&signed_in(Role::Recruiter), &[Role::Recruiter, Role::Admin]), GuardDecision::Allow);
    assert_eq!(decide(&signed_in(Role::Admin), &[Role::Admin]), GuardDecision::Allow);
}
