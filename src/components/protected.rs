//! Route wrapper enforcing sign-in and role restrictions.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionHandle;
use crate::util::guard::{GuardDecision, decide, install_login_redirect};

/// Render `children` only when the current session passes the guard.
///
/// `allowed` empty means any signed-in role. Anonymous visitors are sent to
/// `/login`; signed-in users with another role get a "not authorized" panel.
#[component]
pub fn Protected(#[prop(optional)] allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    install_login_redirect(session, use_navigate());

    let decision = Memo::new(move |_| session.with(|s| decide(s, allowed)));

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending => view! {
            <div class="page-spinner" aria-busy="true">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        GuardDecision::RedirectToLogin => view! { <p class="page-note">"Redirecting to login..."</p> }.into_any(),
        GuardDecision::Forbidden => view! {
            <div class="page forbidden">
                <h1>"403"</h1>
                <p>"You are not authorized to view this page."</p>
                <A href="/jobs" attr:class="btn">"Back to jobs"</A>
            </div>
        }
        .into_any(),
    }
}
