//! Server interpretation of a job search: intent, clickable refinements and
//! external job-site links.

use leptos::prelude::*;

use crate::net::types::{ExternalLink, ProcessedSearch};
use crate::state::jobs::{SearchChip, chip_groups};

/// Intent line plus chip groups; clicking a chip calls `on_refine`.
#[component]
pub fn SearchInsights(processed: ProcessedSearch, on_refine: Callback<SearchChip>) -> impl IntoView {
    let heading = if processed.use_ai { "AI Processed Your Search" } else { "Search Results" };
    let groups = chip_groups(&processed)
        .into_iter()
        .map(|(label, chips)| {
            let buttons = chips
                .into_iter()
                .map(|chip| {
                    let class = chip.class();
                    let text = chip.text().to_owned();
                    view! {
                        <button type="button" class=class on:click=move |_| on_refine.run(chip.clone())>
                            {text}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="search-insights__group">
                    <span class="search-insights__label">{label}</span>
                    <div class="search-insights__chips">{buttons}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="search-insights">
            <h3 class="search-insights__heading">{heading}</h3>
            <p>
                <span class="search-insights__label">"Searching for: "</span>
                <em>{format!("\"{}\"", processed.intent)}</em>
            </p>
            {groups}
        </div>
    }
}

/// "Search External Job Sites" panel; renders nothing for an empty list.
#[component]
pub fn ExternalLinks(links: Vec<ExternalLink>) -> impl IntoView {
    (!links.is_empty()).then(|| {
        let cards = links
            .into_iter()
            .map(|link| {
                let badge = link.relevance.map(|r| {
                    view! { <span class="relevance">{r.label()}</span> }
                });
                view! {
                    <a class="external-link" href=link.url target="_blank" rel="noopener noreferrer">
                        <h4>{link.source}</h4>
                        <p>{link.description}</p>
                        {badge}
                    </a>
                }
            })
            .collect_view();
        view! {
            <section class="external-links">
                <h3>"Search External Job Sites"</h3>
                <p>"Explore more opportunities from popular job search platforms:"</p>
                <div class="external-links__grid">{cards}</div>
            </section>
        }
    })
}
