//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected::Protected` wraps every non-public route and renders
//! whatever `decide` returns. Keeping the decision a pure function lets the
//! redirect rules be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::{Session, SessionHandle};

/// What a protected route should render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup restore still running; show a spinner and do not redirect.
    Pending,
    Allow,
    RedirectToLogin,
    /// Signed in but the role is not permitted here.
    Forbidden,
}

/// Decide access for `session`; an empty `allowed` list admits any signed-in role.
#[must_use]
pub fn decide(session: &Session, allowed: &[Role]) -> GuardDecision {
    if session.is_loading() {
        return GuardDecision::Pending;
    }
    match session.role() {
        None => GuardDecision::RedirectToLogin,
        Some(role) if allowed.is_empty() || allowed.contains(&role) => GuardDecision::Allow,
        Some(_) => GuardDecision::Forbidden,
    }
}

/// Redirect to `/login` whenever the restore has finished and nobody is signed in.
pub fn install_login_redirect<F>(session: SessionHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(|s| decide(s, &[])) == GuardDecision::RedirectToLogin {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
