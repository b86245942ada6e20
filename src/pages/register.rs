//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppStore;
use crate::net::types::{RegisterRequest, Role};
use crate::state::session::SessionHandle;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

/// Roles a visitor may pick for themselves.
const SELF_SERVICE_ROLES: [(Role, &str); 2] = [(Role::Candidate, "Job Seeker"), (Role::Recruiter, "Recruiter")];

fn parse_role(value: &str) -> Role {
    SELF_SERVICE_ROLES.iter().find(|(role, _)| role.as_str() == value).map_or(Role::Candidate, |(role, _)| *role)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let navigate = use_navigate();
    let lifetime = ScreenLifetime::install();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Candidate);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let form = RegisterRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let store = store.clone();
        let navigate = navigate.clone();
        let lifetime = lifetime.clone();
        spawn_browser(async move {
            let result = session.register(&store, &form).await;
            if !lifetime.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => navigate("/jobs", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let role_options = SELF_SERVICE_ROLES
        .iter()
        .map(|(value, label)| {
            let value = *value;
            view! {
                <option value=value.as_str() selected=move || role.get() == value>
                    {*label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                {move || error.get().map(|text| view! { <div class="flash flash--error">{text}</div> })}
                <label>
                    "Full name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email address"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        minlength="6"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "I am a"
                    <select on:change=move |ev| role.set(parse_role(&event_target_value(&ev)))>
                        {role_options}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
