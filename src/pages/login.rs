//! Email + password sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppStore;
use crate::state::session::SessionHandle;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let navigate = use_navigate();
    let lifetime = ScreenLifetime::install();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let store = store.clone();
        let navigate = navigate.clone();
        let lifetime = lifetime.clone();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        spawn_browser(async move {
            let result = session.login(&store, &email_value, &password_value).await;
            if !lifetime.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => navigate("/jobs", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e:?}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in to your account"</h1>
                {move || error.get().map(|text| view! { <div class="flash flash--error">{text}</div> })}
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
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/register">"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
