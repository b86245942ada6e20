//! Profile page: identity header for everyone, full editor and resume
//! management for candidates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Saving, uploading and deleting each end with a session refresh so the
//! navbar name and the resume URL used by job applications stay current.

use leptos::prelude::*;

use crate::app::AppStore;
use crate::components::flash_banner::FlashBanner;
use crate::net::types::{Credential, Role};
use crate::pages::profile_form::{AdditionalSection, EducationSection, PersonalSection, ProfessionalSection, WorkSection};
use crate::state::profile::{ProfileDraft, ProfileTab, resume_file_id};
use crate::state::session::SessionHandle;
use crate::util::file_pick::{now_timestamp, picked_file};
use crate::util::flash::{FlashState, flash_error, flash_success};
use crate::util::format::date_label;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[component]
fn IdentityHeader() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    move || {
        session.identity().map(|user| {
            view! {
                <div class="card profile-header">
                    <div class="profile-header__avatar">{user.name.chars().next().map(|c| c.to_uppercase().to_string())}</div>
                    <div>
                        <h2>{user.name.clone()}</h2>
                        <p>{user.email.clone()}</p>
                        <span class="role-badge">{user.role.as_str()}</span>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ResumeSection(draft: RwSignal<ProfileDraft>, flash: RwSignal<FlashState>, lifetime: ScreenLifetime) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let uploading = RwSignal::new(false);

    let on_pick = {
        let store = store.clone();
        let lifetime = lifetime.clone();
        move |ev: leptos::ev::Event| {
            let (Some(picked), Some(credential)) = (picked_file(&ev), session.credential_untracked()) else {
                return;
            };
            uploading.set(true);
            flash.update(FlashState::clear);
            let store = store.clone();
            let lifetime = lifetime.clone();
            spawn_browser(async move {
                let result = match picked.read().await {
                    Ok(file) => store.api().upload_resume(file, &credential).await,
                    Err(e) => Err(e.into()),
                };
                if !lifetime.is_alive() {
                    return;
                }
                uploading.set(false);
                match result {
                    Ok(upload) => {
                        draft.update(|d| d.apply_upload(upload, now_timestamp()));
                        session.refresh(&store).await;
                        flash_success(flash, "Resume uploaded successfully!");
                    }
                    Err(e) => {
                        leptos::logging::warn!("resume upload failed: {e}");
                        session.expire_if_unauthorized(&store, &e);
                        flash_error(flash, e.user_message("Error uploading resume"));
                    }
                }
            });
        }
    };

    let on_delete = {
        let store = store.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(credential) = session.credential_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Are you sure you want to delete your resume?").ok())
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
            }
            let Some(file_id) = draft.with_untracked(|d| resume_file_id(&d.profile.resume_url).map(str::to_owned)) else {
                leptos::logging::warn!("resume url has no file id");
                flash_error(flash, "Error deleting resume");
                return;
            };
            let store = store.clone();
            let lifetime = lifetime.clone();
            spawn_browser(delete_resume(store, session, credential, file_id, draft, flash, lifetime));
        }
    };

    let api_base = store.api().base_url().to_owned();
    let resume_card = move || {
        let Some(profile) = draft.with(|d| d.has_resume().then(|| d.profile.clone())) else {
            return view! { <p>"No resume uploaded yet"</p> }.into_any();
        };
        let download = format!("{api_base}{}", profile.resume_url);
        let preview = format!("{download}/view");
        let uploaded = profile.resume_uploaded_at.as_deref().map(date_label).map(str::to_owned);
        let keywords = (!profile.resume_keywords.is_empty()).then(|| {
            let tags = profile.resume_keywords.iter().map(|k| view! { <span class="tag">{k.clone()}</span> }).collect_view();
            view! {
                <div class="resume-card__keywords">
                    <p>"Extracted Keywords:"</p>
                    <div class="tags">{tags}</div>
                </div>
            }
        });
        view! {
            <div class="resume-card">
                <div class="resume-card__header">
                    <div>
                        <h3>{profile.resume_file_name.clone()}</h3>
                        {uploaded.map(|d| view! { <p>{format!("Uploaded: {d}")}</p> })}
                    </div>
                    <div class="resume-card__actions">
                        <a class="btn btn--primary" href=download target="_blank" rel="noopener noreferrer">"Download"</a>
                        <a class="btn" href=preview target="_blank" rel="noopener noreferrer">"View"</a>
                        <button type="button" class="btn btn--danger" on:click=on_delete.clone()>"Delete"</button>
                    </div>
                </div>
                {keywords}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="profile-section">
            <h2>"Resume Management"</h2>
            {resume_card}
            <label class="field">
                <span class="field__label">"Upload Resume (PDF or DOC/DOCX)"</span>
                <input type="file" accept=".pdf,.doc,.docx" disabled=move || uploading.get() on:change=on_pick/>
            </label>
            <Show when=move || uploading.get()>
                <p class="page-note">"Uploading and parsing resume..."</p>
            </Show>
        </section>
    }
}

async fn delete_resume(
    store: AppStore,
    session: SessionHandle,
    credential: Credential,
    file_id: String,
    draft: RwSignal<ProfileDraft>,
    flash: RwSignal<FlashState>,
    lifetime: ScreenLifetime,
) {
    let result = store.api().delete_resume(&file_id, &credential).await;
    if !lifetime.is_alive() {
        return;
    }
    match result {
        Ok(()) => {
            draft.update(ProfileDraft::clear_resume);
            session.refresh(&store).await;
            flash_success(flash, "Resume deleted successfully");
        }
        Err(e) => {
            leptos::logging::warn!("resume delete failed: {e}");
            session.expire_if_unauthorized(&store, &e);
            flash_error(flash, "Error deleting resume");
        }
    }
}

#[component]
fn CandidateEditor(lifetime: ScreenLifetime) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();

    let draft = RwSignal::new(ProfileDraft::default());
    let loading = RwSignal::new(true);
    let flash = RwSignal::new(FlashState::default());
    let saving = RwSignal::new(false);

    if let Some(credential) = session.credential_untracked() {
        let store = store.clone();
        let lifetime = lifetime.clone();
        spawn_browser(async move {
            let result = store.api().fetch_profile(&credential).await;
            if !lifetime.is_alive() {
                return;
            }
            match result {
                Ok(profile) => draft.set(ProfileDraft::from_profile(profile)),
                Err(e) => {
                    leptos::logging::warn!("profile fetch failed: {e}");
                    session.expire_if_unauthorized(&store, &e);
                    flash_error(flash, "Error loading profile");
                }
            }
            loading.set(false);
        });
    } else {
        loading.set(false);
    }

    let on_save = {
        let lifetime = lifetime.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(credential) = session.credential_untracked() else {
                return;
            };
            if saving.get_untracked() {
                return;
            }
            saving.set(true);
            flash.update(FlashState::clear);
            let update = draft.with_untracked(ProfileDraft::to_update);
            let store = store.clone();
            let lifetime = lifetime.clone();
            spawn_browser(async move {
                let result = store.api().update_profile(&update, &credential).await;
                if !lifetime.is_alive() {
                    return;
                }
                saving.set(false);
                match result {
                    Ok(()) => {
                        draft.update(|d| d.profile.skills = update.skills);
                        session.refresh(&store).await;
                        flash_success(flash, "Profile updated successfully!");
                    }
                    Err(e) => {
                        leptos::logging::warn!("profile update failed: {e}");
                        session.expire_if_unauthorized(&store, &e);
                        flash_error(flash, e.user_message("Error updating profile"));
                    }
                }
            });
        }
    };

    let tab = Memo::new(move |_| draft.with(|d| d.tab));
    let tabs = move || {
        ProfileTab::ALL
            .into_iter()
            .map(|t| {
                view! {
                    <button
                        type="button"
                        class=move || {
                            if tab.get() == t { "profile-tabs__tab profile-tabs__tab--active" } else { "profile-tabs__tab" }
                        }
                        on:click=move |_| draft.update(|d| d.tab = t)
                    >
                        {t.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let lifetime_for_resume = lifetime.clone();
    let section = move || match tab.get() {
        ProfileTab::Personal => view! { <PersonalSection draft=draft/> }.into_any(),
        ProfileTab::Professional => view! { <ProfessionalSection draft=draft/> }.into_any(),
        ProfileTab::Education => view! { <EducationSection draft=draft/> }.into_any(),
        ProfileTab::Work => view! { <WorkSection draft=draft/> }.into_any(),
        ProfileTab::Additional => view! { <AdditionalSection draft=draft/> }.into_any(),
        ProfileTab::Resume => {
            view! { <ResumeSection draft=draft flash=flash lifetime=lifetime_for_resume.clone()/> }.into_any()
        }
    };

    view! {
        <FlashBanner flash=flash/>
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="page-spinner" aria-busy="true">
                        <div class="spinner"></div>
                        <p>"Loading your profile..."</p>
                    </div>
                }
            }
        >
            <nav class="card profile-tabs">{tabs}</nav>
            <form class="card form" on:submit=on_save.clone()>
                {section.clone()}
                <div class="form__footer">
                    <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                        "Save Profile"
                    </button>
                </div>
            </form>
        </Show>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let lifetime = ScreenLifetime::install();
    let is_candidate = Memo::new(move |_| session.with(|s| s.role() == Some(Role::Candidate)));

    view! {
        <div class="page profile-page">
            <h1>"My Profile"</h1>
            <IdentityHeader/>
            <Show when=move || is_candidate.get()>
                <CandidateEditor lifetime=lifetime.clone()/>
            </Show>
        </div>
    }
}
