//! Browse and search jobs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter edits refetch the plain listing while no free-text search is
//! active; submitting the search box (or clicking a suggestion chip) runs the
//! server-side search. Each call is tagged with a generation so only the
//! newest response lands in the view.

use leptos::prelude::*;

use crate::app::AppStore;
use crate::components::job_card::JobCard;
use crate::components::search_insights::{ExternalLinks, SearchInsights};
use crate::net::api::JobFilters;
use crate::state::jobs::{JobQuery, JobsView, SearchChip};
use crate::state::session::SessionHandle;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[component]
pub fn JobsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let lifetime = ScreenLifetime::install();

    let query = RwSignal::new(JobQuery::default());
    let results = RwSignal::new(JobsView { loading: true, ..JobsView::default() });
    let generation = StoredValue::new(0_u64);

    let run = move |request: JobQuery| {
        let store = store.clone();
        let lifetime = lifetime.clone();
        let mut current = 0;
        generation.update_value(|g| {
            *g += 1;
            current = *g;
        });
        results.update(JobsView::begin);
        spawn_browser(async move {
            let credential = session.credential_untracked();
            let outcome = store.api().find_jobs(&request.search, &request.filters, credential.as_ref()).await;
            if !lifetime.is_alive() || generation.get_value() != current {
                return;
            }
            if let Err(e) = &outcome {
                leptos::logging::warn!("job lookup failed: {e}");
                session.expire_if_unauthorized(&store, e);
            }
            results.update(|v| v.apply(&request, outcome));
        });
    };

    // Filters alone drive the listing; search text changes do not.
    let filters = Memo::new(move |_| query.with(|q| q.filters.clone()));
    {
        let run = run.clone();
        Effect::new(move |_| {
            let _: JobFilters = filters.get();
            let current = query.get_untracked();
            if current.refetch_on_filter_change() {
                run(current);
            }
        });
    }

    let on_submit = {
        let run = run.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            run(query.get_untracked());
        }
    };

    let on_refine = Callback::new(move |chip: SearchChip| {
        query.update(|q| q.refine(&chip));
        run(query.get_untracked());
    });

    let busy = move || results.with(|v| v.loading);

    view! {
        <div class="page jobs-page">
            <h1>"Browse Jobs"</h1>

            <form class="search-panel" on:submit=on_submit>
                <div class="search-panel__row">
                    <input
                        type="text"
                        class="search-panel__query"
                        placeholder="Search with AI... (e.g., 'remote python developer', 'senior software engineer in New York')"
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary" disabled=busy>
                        {move || if busy() { "Searching..." } else { "Search" }}
                    </button>
                </div>
                <div class="search-panel__row">
                    <input
                        type="text"
                        placeholder="Location (optional)"
                        prop:value=move || query.with(|q| q.filters.location.clone())
                        on:input=move |ev| query.update(|q| q.filters.location = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Skills (optional)"
                        prop:value=move || query.with(|q| q.filters.skills.clone())
                        on:input=move |ev| query.update(|q| q.filters.skills = event_target_value(&ev))
                    />
                </div>
            </form>

            {move || {
                results
                    .with(|v| v.processed_search.clone())
                    .map(|processed| view! { <SearchInsights processed=processed on_refine=on_refine/> })
            }}

            {move || {
                results.with(|v| {
                    let fast = v.processed_search.as_ref().is_some_and(|p| !p.use_ai);
                    v.summary().map(|text| {
                        view! {
                            <div class="search-summary">
                                <span>{text}</span>
                                <Show when=move || fast>
                                    <span class="search-summary__mode">"Fast Search"</span>
                                </Show>
                            </div>
                        }
                    })
                })
            }}

            {move || {
                let links = results.with(|v| v.external_links.clone());
                view! { <ExternalLinks links=links/> }
            }}

            <div class="job-list">
                {move || {
                    let shown = results.get();
                    if shown.loading {
                        view! {
                            <div class="page-spinner" aria-busy="true">
                                <div class="spinner"></div>
                            </div>
                        }
                        .into_any()
                    } else if shown.jobs.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">"No jobs found."</p>
                                <p class="empty-state__hint">{shown.empty_hint()}</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        shown
                            .jobs
                            .into_iter()
                            .map(|job| view! { <JobCard job=job/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
