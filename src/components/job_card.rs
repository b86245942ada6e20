//! Job summary card used by the browse and recommended lists.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Job;
use crate::util::format::salary_range;

/// Skills shown on a card before the list is cut off.
const CARD_SKILLS: usize = 5;

/// Clickable job summary linking to `/jobs/:id`.
///
/// `rank` adds a "#N Match" badge (1-based) for recommendation lists.
#[component]
pub fn JobCard(job: Job, #[prop(optional)] rank: Option<usize>) -> impl IntoView {
    let href = format!("/jobs/{}", job.id);
    let salary = job.salary.as_ref().and_then(|s| salary_range(s, false));
    let location = job.location.clone().filter(|l| !l.is_empty());
    let skills = job.skills.iter().take(CARD_SKILLS).cloned().collect::<Vec<_>>();

    view! {
        <A href=href attr:class="job-card">
            {rank.map(|n| view! { <span class="job-card__rank">{format!("#{n} Match")}</span> })}
            <h2 class="job-card__title">{job.title}</h2>
            <p class="job-card__company">{job.company}</p>
            <p class="job-card__description">{job.description}</p>
            <div class="job-card__meta">
                {location.map(|l| view! { <span class="job-card__location">{l}</span> })}
                {salary.map(|s| view! { <span class="job-card__salary">{s}</span> })}
                <span class="job-card__experience">{format!("{} years exp.", job.experience)}</span>
            </div>
            <div class="job-card__skills">
                {skills.into_iter().map(|skill| view! { <span class="tag">{skill}</span> }).collect_view()}
            </div>
            <Show when=move || rank.is_none()>
                <span class="job-card__cta">"View Details →"</span>
            </Show>
        </A>
    }
}
