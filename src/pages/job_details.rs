//! Single job view with the candidate apply and bookmark actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The job itself is public. Signed-in users additionally load their own
//! applications (for the already-applied check) and candidates load their
//! profile bookmarks. Reloads whenever the route id or the signed-in user
//! changes.

#[cfg(test)]
#[path = "job_details_test.rs"]
mod job_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::AppStore;
use crate::components::flash_banner::FlashBanner;
use crate::net::types::{Application, ApplyRequest, Credential, Job, Role};
use crate::state::session::SessionHandle;
use crate::util::flash::{FlashState, flash_error, flash_success};
use crate::util::format::{date_label, salary_range};
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

/// What the apply area of the page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyPanel {
    /// Anonymous visitors and non-candidates.
    Hidden,
    AlreadyApplied,
    ApplyButton,
    Form,
}

#[must_use]
pub fn apply_panel(role: Option<Role>, applied: bool, form_open: bool) -> ApplyPanel {
    match role {
        Some(Role::Candidate) if applied => ApplyPanel::AlreadyApplied,
        Some(Role::Candidate) if form_open => ApplyPanel::Form,
        Some(Role::Candidate) => ApplyPanel::ApplyButton,
        _ => ApplyPanel::Hidden,
    }
}

/// Whether any of `applications` targets `job_id` (populated or bare reference).
#[must_use]
pub fn has_applied(applications: &[Application], job_id: &str) -> bool {
    applications.iter().any(|app| app.job.id() == job_id)
}

#[derive(Clone, Debug, Default)]
struct Detail {
    job: Option<Job>,
    loading: bool,
    applied: bool,
    bookmarked: bool,
}

async fn load_detail(store: &AppStore, session: SessionHandle, job_id: &str, credential: Option<Credential>) -> Detail {
    let mut detail = Detail::default();
    let api = store.api();
    match api.fetch_job(job_id, credential.as_ref()).await {
        Ok(job) => detail.job = Some(job),
        Err(e) => {
            leptos::logging::warn!("job {job_id} fetch failed: {e}");
            session.expire_if_unauthorized(store, &e);
        }
    }
    let Some(credential) = credential else {
        return detail;
    };
    match api.my_applications(&credential).await {
        Ok(applications) => detail.applied = has_applied(&applications, job_id),
        Err(e) => leptos::logging::warn!("application status check failed: {e}"),
    }
    if session.identity_untracked().is_some_and(|u| u.role == Role::Candidate) {
        match api.fetch_profile(&credential).await {
            Ok(profile) => detail.bookmarked = profile.bookmarks.iter().any(|id| id == job_id),
            Err(e) => leptos::logging::warn!("bookmark status check failed: {e}"),
        }
    }
    detail
}

#[component]
pub fn JobDetailsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let params = use_params_map();
    let lifetime = ScreenLifetime::install();

    let detail = RwSignal::new(Detail { loading: true, ..Detail::default() });
    let form_open = RwSignal::new(false);
    let cover_letter = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let flash = RwSignal::new(FlashState::default());

    let job_id = move || params.read().get("id");

    {
        let store = store.clone();
        let lifetime = lifetime.clone();
        Effect::new(move || {
            let Some(id) = job_id() else {
                detail.set(Detail::default());
                return;
            };
            let credential = session.with(|s| s.credential().cloned());
            detail.update(|d| d.loading = true);
            let store = store.clone();
            let lifetime = lifetime.clone();
            spawn_browser(async move {
                let loaded = load_detail(&store, session, &id, credential).await;
                let still_here = params.with_untracked(|p| p.get("id").as_deref() == Some(id.as_str()));
                if lifetime.is_alive() && still_here {
                    detail.set(loaded);
                }
            });
        });
    }

    let on_bookmark = {
        let store = store.clone();
        let lifetime = lifetime.clone();
        move |_: leptos::ev::MouseEvent| {
            let (Some(credential), Some(id)) = (session.credential_untracked(), job_id()) else {
                return;
            };
            let store = store.clone();
            let lifetime = lifetime.clone();
            spawn_browser(async move {
                let result = store.api().toggle_bookmark(&id, &credential).await;
                if !lifetime.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => detail.update(|d| d.bookmarked = !d.bookmarked),
                    Err(e) => {
                        leptos::logging::warn!("bookmark toggle failed: {e}");
                        session.expire_if_unauthorized(&store, &e);
                    }
                }
            });
        }
    };

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(credential), Some(user), Some(id)) =
            (session.credential_untracked(), session.identity_untracked(), job_id())
        else {
            return;
        };
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let request = ApplyRequest { job_id: id, cover_letter: cover_letter.get_untracked(), resume_url: user.resume_url };
        let store = store.clone();
        let lifetime = lifetime.clone();
        spawn_browser(async move {
            let result = store.api().apply(&request, &credential).await;
            if !lifetime.is_alive() {
                return;
            }
            submitting.set(false);
            match result {
                Ok(()) => {
                    detail.update(|d| d.applied = true);
                    form_open.set(false);
                    flash_success(flash, "Application submitted successfully!");
                }
                Err(e) => {
                    session.expire_if_unauthorized(&store, &e);
                    flash_error(flash, e.user_message("Error applying for job"));
                }
            }
        });
    };

    let panel = Memo::new(move |_| {
        apply_panel(session.with(|s| s.role()), detail.with(|d| d.applied), form_open.get())
    });

    let apply_area = move || match panel.get() {
        ApplyPanel::Hidden => ().into_any(),
        ApplyPanel::AlreadyApplied => view! {
            <div class="notice notice--success">"You have already applied for this job"</div>
        }
        .into_any(),
        ApplyPanel::ApplyButton => view! {
            <button class="btn btn--primary" on:click=move |_| form_open.set(true)>
                "Apply Now"
            </button>
        }
        .into_any(),
        ApplyPanel::Form => view! {
            <form class="apply-form" on:submit=on_apply.clone()>
                <label>
                    "Cover Letter"
                    <textarea
                        rows="6"
                        placeholder="Tell us why you're a great fit for this position..."
                        prop:value=move || cover_letter.get()
                        on:input=move |ev| cover_letter.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="apply-form__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                        "Submit Application"
                    </button>
                    <button type="button" class="btn" on:click=move |_| form_open.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        }
        .into_any(),
    };

    let is_candidate = move || session.with(|s| s.is_candidate());

    view! {
        <div class="page job-details">
            <FlashBanner flash=flash/>
            {move || {
                let current = detail.get();
                if current.loading {
                    return view! {
                        <div class="page-spinner" aria-busy="true">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any();
                }
                let Some(job) = current.job else {
                    return view! { <p class="page-note">"Job not found"</p> }.into_any();
                };
                let salary = job.salary.as_ref().and_then(|s| salary_range(s, true));
                let location = job.location.clone().filter(|l| !l.is_empty());
                let poster = job.posted_by.as_ref().and_then(|p| p.name()).map(str::to_owned);
                let posted_on = job.created_at.as_deref().map(date_label).map(str::to_owned);
                let bookmarked = current.bookmarked;
                let requirements = (!job.requirements.is_empty()).then(|| {
                    let items = job.requirements.iter().map(|r| view! { <li>{r.clone()}</li> }).collect_view();
                    view! {
                        <section>
                            <h2>"Requirements"</h2>
                            <ul>{items}</ul>
                        </section>
                    }
                });
                let skills = job.skills.iter().map(|s| view! { <span class="tag">{s.clone()}</span> }).collect_view();
                view! {
                    <article class="card">
                        <header class="job-details__header">
                            <div>
                                <h1>{job.title.clone()}</h1>
                                <p class="job-details__company">{job.company.clone()}</p>
                            </div>
                            {is_candidate()
                                .then(|| {
                                    view! {
                                        <button
                                            class=if bookmarked { "bookmark bookmark--on" } else { "bookmark" }
                                            title=if bookmarked { "Remove bookmark" } else { "Bookmark" }
                                            on:click=on_bookmark.clone()
                                        >
                                            "★"
                                        </button>
                                    }
                                })}
                        </header>
                        <div class="job-details__meta">
                            {location.map(|l| view! { <span>{l}</span> })}
                            {salary.map(|s| view! { <span>{s}</span> })}
                            <span>{format!("{} years experience", job.experience)}</span>
                        </div>
                        <section>
                            <h2>"Required Skills"</h2>
                            <div class="tags">{skills}</div>
                        </section>
                        <div class="job-details__apply">{apply_area.clone()}</div>
                        <section>
                            <h2>"Job Description"</h2>
                            <p class="job-details__description">{job.description.clone()}</p>
                        </section>
                        {requirements}
                        <footer class="job-details__footer">
                            <p>"Posted by: " <strong>{poster}</strong></p>
                            {posted_on.map(|d| view! { <p>{format!("Posted on: {d}")}</p> })}
                        </footer>
                    </article>
                }
                .into_any()
            }}
        </div>
    }
}
