//! Browse-jobs query and result state.
//!
//! DESIGN
//! ======
//! The page keeps one `JobQuery` (what the user typed) and one `JobsView`
//! (what the last call returned). `ApiClient::find_jobs` picks listing vs
//! search from the query; `JobsView::apply` folds either outcome, including
//! failures, into what the page renders.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::api::{JobFilters, JobResults};
use crate::net::error::ApiError;
use crate::net::types::{ExternalLink, Job, ProcessedSearch};
use crate::util::format::count_label;

/// Intent shown when the search call itself failed.
pub const SEARCH_ERROR_INTENT: &str = "Search error - please try again";

/// Free-text search plus the optional filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub search: String,
    pub filters: JobFilters,
}

impl JobQuery {
    /// Whether submitting runs the search call rather than the plain listing.
    #[must_use]
    pub fn is_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Location/skills edits only refetch while no free-text search is active.
    #[must_use]
    pub fn refetch_on_filter_change(&self) -> bool {
        !self.is_search()
    }

    /// Re-target the query at a clicked suggestion.
    pub fn refine(&mut self, chip: &SearchChip) {
        self.search = chip.text().to_owned();
        if let SearchChip::Skill(skill) = chip {
            self.filters.skills.clone_from(skill);
        }
    }
}

/// Clickable suggestion from the server's interpretation of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchChip {
    Keyword(String),
    Skill(String),
    JobTitle(String),
    RelatedTerm(String),
}

impl SearchChip {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Keyword(t) | Self::Skill(t) | Self::JobTitle(t) | Self::RelatedTerm(t) => t,
        }
    }

    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "chip chip--keyword",
            Self::Skill(_) => "chip chip--skill",
            Self::JobTitle(_) => "chip chip--title",
            Self::RelatedTerm(_) => "chip chip--term",
        }
    }
}

/// Chip groups for the insight panel, in display order; empty groups are omitted.
#[must_use]
pub fn chip_groups(processed: &ProcessedSearch) -> Vec<(&'static str, Vec<SearchChip>)> {
    let list = |items: Option<&[String]>, chip: fn(String) -> SearchChip| -> Vec<SearchChip> {
        items.unwrap_or_default().iter().filter(|t| !t.is_empty()).cloned().map(chip).collect()
    };
    let title: Vec<SearchChip> =
        processed.job_title.iter().filter(|t| !t.is_empty()).cloned().map(SearchChip::JobTitle).collect();
    [
        ("Click keywords to search:", list(processed.keywords.as_deref(), SearchChip::Keyword)),
        ("Click skills to search:", list(processed.skills.as_deref(), SearchChip::Skill)),
        ("Job Title Detected:", title),
        ("Related searches:", list(processed.search_terms.as_deref(), SearchChip::RelatedTerm)),
    ]
    .into_iter()
    .filter(|(_, chips)| !chips.is_empty())
    .collect()
}

/// What the jobs page currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobsView {
    pub jobs: Vec<Job>,
    pub processed_search: Option<ProcessedSearch>,
    pub external_links: Vec<ExternalLink>,
    pub loading: bool,
}

impl JobsView {
    /// Mark a call as in flight. The previous interpretation is dropped
    /// right away so stale chips and summaries never sit under a new search.
    pub fn begin(&mut self) {
        self.loading = true;
        self.processed_search = None;
    }

    /// Fold the outcome of `find_jobs(query)` into the view.
    ///
    /// A failed listing keeps the previous jobs; a failed search empties the
    /// list and shows a synthetic, non-AI interpretation carrying the error.
    pub fn apply(&mut self, query: &JobQuery, result: Result<JobResults, ApiError>) {
        self.loading = false;
        match result {
            Ok(JobResults::Listing(jobs)) => {
                self.jobs = jobs;
                self.processed_search = None;
                self.external_links.clear();
            }
            Ok(JobResults::Search(results)) => {
                self.jobs = results.jobs;
                self.processed_search = results.processed_search;
                self.external_links = results.external_links;
            }
            Err(_) if query.is_search() => {
                self.jobs.clear();
                self.processed_search = Some(search_error(&query.search));
                self.external_links.clear();
            }
            Err(_) => {}
        }
    }

    /// "Found 3 jobs matching: "rust"" style summary, shown only after a search.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let processed = self.processed_search.as_ref()?;
        let query = &processed.original_query;
        Some(if self.jobs.is_empty() {
            format!("No jobs found for: \"{query}\"")
        } else {
            format!("Found {} matching: \"{query}\"", count_label(self.jobs.len(), "job"))
        })
    }

    /// Second line of the empty-state panel.
    #[must_use]
    pub fn empty_hint(&self) -> &'static str {
        if self.processed_search.is_some() {
            "Try adjusting your search description or filters."
        } else {
            "Try searching with AI or adjusting your filters."
        }
    }
}

fn search_error(query: &str) -> ProcessedSearch {
    ProcessedSearch {
        original_query: query.to_owned(),
        intent: SEARCH_ERROR_INTENT.to_owned(),
        use_ai: false,
        ..ProcessedSearch::default()
    }
}
