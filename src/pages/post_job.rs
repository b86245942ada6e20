//! Job posting form for recruiters and admins.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppStore;
use crate::state::post_job::{CURRENCIES, PostJobDraft};
use crate::state::session::SessionHandle;
use crate::util::lifetime::{ScreenLifetime, spawn_browser};

#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let store = expect_context::<AppStore>();
    let navigate = use_navigate();
    let lifetime = ScreenLifetime::install();

    let draft = RwSignal::new(PostJobDraft::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credential) = session.credential_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let job = draft.with_untracked(PostJobDraft::to_new_job);
        let store = store.clone();
        let navigate = navigate.clone();
        let lifetime = lifetime.clone();
        spawn_browser(async move {
            let result = store.api().post_job(&job, &credential).await;
            if !lifetime.is_alive() {
                return;
            }
            busy.set(false);
            match result {
                Ok(created) => {
                    leptos::logging::log!("job posted: {}", created.id);
                    navigate(&format!("/jobs/{}", created.id), NavigateOptions::default());
                }
                Err(e) => {
                    session.expire_if_unauthorized(&store, &e);
                    error.set(Some(e.user_message("Error posting job")));
                }
            }
        });
    };

    let currency_options = CURRENCIES
        .iter()
        .map(|code| {
            view! {
                <option value=*code selected=move || draft.with(|d| d.currency == *code)>
                    {*code}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="page post-job-page">
            <h1>"Post a Job"</h1>
            <form class="card form" on:submit=on_submit>
                {move || error.get().map(|text| view! { <div class="flash flash--error">{text}</div> })}
                <label>
                    "Job Title *"
                    <input
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Company Name *"
                    <input
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.company.clone())
                        on:input=move |ev| draft.update(|d| d.company = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Job Description *"
                    <textarea
                        required
                        rows="6"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Requirements (one per line)"
                    <textarea
                        rows="4"
                        placeholder="Enter each requirement on a new line"
                        prop:value=move || draft.with(|d| d.requirements.clone())
                        on:input=move |ev| draft.update(|d| d.requirements = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Required Skills (comma-separated)"
                    <input
                        type="text"
                        placeholder="JavaScript, React, Node.js"
                        prop:value=move || draft.with(|d| d.skills.clone())
                        on:input=move |ev| draft.update(|d| d.skills = event_target_value(&ev))
                    />
                </label>
                <div class="form__row">
                    <label>
                        "Years of Experience"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.experience.clone())
                            on:input=move |ev| draft.update(|d| d.experience = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Location"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.location.clone())
                            on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                        />
                    </label>
                </div>
                <fieldset class="form__row">
                    <legend>"Salary Range"</legend>
                    <input
                        type="number"
                        placeholder="Min (K)"
                        prop:value=move || draft.with(|d| d.salary_min.clone())
                        on:input=move |ev| draft.update(|d| d.salary_min = event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Max (K)"
                        prop:value=move || draft.with(|d| d.salary_max.clone())
                        on:input=move |ev| draft.update(|d| d.salary_max = event_target_value(&ev))
                    />
                    <select on:change=move |ev| draft.update(|d| d.currency = event_target_value(&ev))>
                        {currency_options}
                    </select>
                </fieldset>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting Job..." } else { "Post Job" }}
                </button>
            </form>
        </div>
    }
}
