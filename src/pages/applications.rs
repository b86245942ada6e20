//! The signed-in user's job applications.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppStore;
use crate::net::types::Application;
use crate::state::session::SessionHandle;
use crate::util::format::date_label;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[component]
fn ApplicationRow(application: Application) -> impl IntoView {
    let href = format!("/jobs/{}", application.job.id());
    let job = application.job.job();
    let title = job.map_or_else(|| "Job Title".to_owned(), |j| j.title.clone());
    let company = job.map(|j| j.company.clone());
    let location = job.and_then(|j| j.location.clone()).filter(|l| !l.is_empty());
    let applied_on = application.created_at.as_deref().map(date_label).map(str::to_owned);
    let cover_letter = application.cover_letter.filter(|c| !c.is_empty());
    let status = application.status;

    view! {
        <div class="card application">
            <div class="application__body">
                <div class="application__title">
                    <h2>{title}</h2>
                    <span class=status.badge_class()>{status.label()}</span>
                </div>
                {company.map(|c| view! { <p class="application__company">{c}</p> })}
                {location.map(|l| view! { <p class="application__meta">{format!("Location: {l}")}</p> })}
                {applied_on.map(|d| view! { <p class="application__meta">{format!("Applied on: {d}")}</p> })}
                {cover_letter.map(|text| {
                    view! {
                        <div class="application__cover">
                            <p class="application__label">"Cover Letter:"</p>
                            <p>{text}</p>
                        </div>
                    }
                })}
            </div>
            <A href=href attr:class="btn btn--primary">"View Job"</A>
        </div>
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let lifetime = ScreenLifetime::install();

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);

    if let Some(credential) = session.credential_untracked() {
        spawn_browser(async move {
            let result = store.api().my_applications(&credential).await;
            if !lifetime.is_alive() {
                return;
            }
            match result {
                Ok(list) => applications.set(list),
                Err(e) => {
                    leptos::logging::warn!("applications fetch failed: {e}");
                    session.expire_if_unauthorized(&store, &e);
                }
            }
            loading.set(false);
        });
    } else {
        loading.set(false);
    }

    view! {
        <div class="page applications-page">
            <h1>"My Applications"</h1>
            {move || {
                if loading.get() {
                    view! {
                        <div class="page-spinner" aria-busy="true">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any()
                } else if applications.with(Vec::is_empty) {
                    view! {
                        <div class="empty-state">
                            <p>"You haven't applied for any jobs yet."</p>
                            <A href="/jobs">"Browse Jobs"</A>
                        </div>
                    }
                    .into_any()
                } else {
                    applications
                        .get()
                        .into_iter()
                        .map(|application| view! { <ApplicationRow application=application/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
