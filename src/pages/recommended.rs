//! Ranked job recommendations for the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppStore;
use crate::components::job_card::JobCard;
use crate::net::types::Job;
use crate::state::session::SessionHandle;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[component]
pub fn RecommendedPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let lifetime = ScreenLifetime::install();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);

    if let Some(credential) = session.credential_untracked() {
        spawn_browser(async move {
            let result = store.api().recommended_jobs(&credential).await;
            if !lifetime.is_alive() {
                return;
            }
            match result {
                Ok(list) => jobs.set(list),
                Err(e) => {
                    leptos::logging::warn!("recommendations failed: {e}");
                    session.expire_if_unauthorized(&store, &e);
                }
            }
            loading.set(false);
        });
    } else {
        loading.set(false);
    }

    view! {
        <div class="page recommended-page">
            <header class="page__header">
                <h1>"Recommended for You"</h1>
                <p>"Jobs matched to your skills and experience"</p>
            </header>
            {move || {
                if loading.get() {
                    view! {
                        <div class="page-spinner" aria-busy="true">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any()
                } else if jobs.with(Vec::is_empty) {
                    view! {
                        <div class="empty-state">
                            <p>"No recommendations available. Try updating your profile with skills and experience."</p>
                            <A href="/profile" attr:class="btn btn--primary">"Update Profile"</A>
                        </div>
                    }
                    .into_any()
                } else {
                    jobs.get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, job)| view! { <JobCard job=job rank=i + 1/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
