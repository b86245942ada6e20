//! Admin statistics dashboard.

use leptos::prelude::*;

use crate::app::AppStore;
use crate::net::types::{AdminStats, StatBucket};
use crate::state::session::SessionHandle;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[derive(Clone, Debug, PartialEq)]
enum StatsLoad {
    Loading,
    Ready(AdminStats),
    Failed,
}

fn bucket_grid(title: &'static str, buckets: Vec<StatBucket>) -> impl IntoView {
    let cells = buckets
        .into_iter()
        .map(|bucket| {
            view! {
                <div class="stat-bucket">
                    <p class="stat-bucket__label">{bucket.label}</p>
                    <p class="stat-bucket__count">{bucket.count}</p>
                </div>
            }
        })
        .collect_view();
    view! {
        <section class="card">
            <h2>{title}</h2>
            <div class="stat-grid">{cells}</div>
        </section>
    }
}

fn dashboard(stats: AdminStats) -> impl IntoView {
    let overview = stats.overview;
    let companies = (!stats.top_companies.is_empty()).then(|| {
        let rows = stats
            .top_companies
            .into_iter()
            .map(|company| {
                view! {
                    <li class="company-row">
                        <span>{company.label}</span>
                        <span>{format!("{} jobs", company.count)}</span>
                    </li>
                }
            })
            .collect_view();
        view! {
            <section class="card">
                <h2>"Top Companies"</h2>
                <ul class="company-list">{rows}</ul>
            </section>
        }
    });

    view! {
        <div class="stat-cards">
            <div class="card stat-card">
                <p class="stat-card__label">"Total Jobs"</p>
                <p class="stat-card__value">{overview.total_jobs}</p>
                <p class="stat-card__note">{format!("{} active", overview.active_jobs)}</p>
            </div>
            <div class="card stat-card">
                <p class="stat-card__label">"Total Applications"</p>
                <p class="stat-card__value">{overview.total_applications}</p>
            </div>
            <div class="card stat-card">
                <p class="stat-card__label">"Total Users"</p>
                <p class="stat-card__value">{overview.total_users}</p>
                <p class="stat-card__note">
                    {format!("{} recruiters, {} candidates", overview.total_recruiters, overview.total_candidates)}
                </p>
            </div>
        </div>
        {bucket_grid("Jobs by Status", stats.jobs_by_status)}
        {bucket_grid("Applications by Status", stats.applications_by_status)}
        {companies}
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let lifetime = ScreenLifetime::install();

    let stats = RwSignal::new(StatsLoad::Loading);

    match session.credential_untracked() {
        Some(credential) => spawn_browser(async move {
            let result = store.api().admin_stats(&credential).await;
            if !lifetime.is_alive() {
                return;
            }
            match result {
                Ok(loaded) => stats.set(StatsLoad::Ready(loaded)),
                Err(e) => {
                    leptos::logging::warn!("admin stats failed: {e}");
                    session.expire_if_unauthorized(&store, &e);
                    stats.set(StatsLoad::Failed);
                }
            }
        }),
        None => stats.set(StatsLoad::Failed),
    }

    view! {
        <div class="page admin-page">
            <h1>"Admin Dashboard"</h1>
            {move || match stats.get() {
                StatsLoad::Loading => view! {
                    <div class="page-spinner" aria-busy="true">
                        <div class="spinner"></div>
                    </div>
                }
                .into_any(),
                StatsLoad::Failed => view! { <p class="page-note">"Failed to load statistics"</p> }.into_any(),
                StatsLoad::Ready(loaded) => dashboard(loaded).into_any(),
            }}
        </div>
    }
}
