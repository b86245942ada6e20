use super::*;
use crate::net::types::SearchResults;

fn job(id: &str) -> Job {
    serde_json::from_value(serde_json::json!({ "_id": id, "title": "Engineer", "company": "Acme" })).unwrap()
}

fn search_query(text: &str) -> JobQuery {
    JobQuery { search: text.to_owned(), filters: JobFilters::default() }
}

#[test]
fn whitespace_query_is_not_a_search() {
    assert!(!search_query("   ").is_search());
    assert!(search_query(" rust ").is_search());
    assert!(search_query("").refetch_on_filter_change());
    assert!(!search_query("rust").refetch_on_filter_change());
}

#[test]
fn skill_chip_also_sets_skills_filter() {
    let mut query = search_query("backend");
    query.refine(&SearchChip::Skill("rust".to_owned()));
    assert_eq!(query.search, "rust");
    assert_eq!(query.filters.skills, "rust");

    query.refine(&SearchChip::Keyword("remote".to_owned()));
    assert_eq!(query.search, "remote");
    assert_eq!(query.filters.skills, "rust");
}

#[test]
fn listing_clears_search_metadata() {
    let mut view = JobsView {
        processed_search: Some(ProcessedSearch::default()),
        external_links: vec![ExternalLink {
            url: "https://jobs.example".to_owned(),
            source: "Example".to_owned(),
            description: String::new(),
            relevance: None,
        }],
        loading: true,
        ..JobsView::default()
    };

    view.apply(&search_query(""), Ok(JobResults::Listing(vec![job("a"), job("b")])));

    assert_eq!(view.jobs.len(), 2);
    assert_eq!(view.processed_search, None);
    assert!(view.external_links.is_empty());
    assert!(!view.loading);
    assert_eq!(view.summary(), None);
}

#[test]
fn search_failure_shows_synthetic_interpretation() {
    let mut view = JobsView { jobs: vec![job("a")], ..JobsView::default() };

    view.apply(&search_query("golang"), Err(ApiError::Unreachable("offline".to_owned())));

    assert!(view.jobs.is_empty());
    let processed = view.processed_search.as_ref().unwrap();
    assert_eq!(processed.intent, SEARCH_ERROR_INTENT);
    assert_eq!(processed.original_query, "golang");
    assert!(!processed.use_ai);
    assert_eq!(view.summary().as_deref(), Some("No jobs found for: \"golang\""));
}

#[test]
fn new_search_drops_previous_interpretation_while_loading() {
    let mut view = JobsView::default();
    let previous = SearchResults {
        jobs: vec![job("a")],
        processed_search: Some(ProcessedSearch {
            original_query: "rust".to_owned(),
            keywords: Some(vec!["systems".to_owned()]),
            ..ProcessedSearch::default()
        }),
        external_links: Vec::new(),
    };
    view.apply(&search_query("rust"), Ok(JobResults::Search(previous)));

    view.begin();

    assert!(view.loading);
    assert_eq!(view.processed_search, None);
    assert_eq!(view.summary(), None);
    assert_eq!(view.jobs.len(), 1);
}

#[test]
fn listing_failure_keeps_previous_jobs() {
    let mut view = JobsView { jobs: vec![job("a")], ..JobsView::default() };
    view.apply(&search_query(""), Err(ApiError::Server { status: 500, message: None, code: None }));
    assert_eq!(view.jobs.len(), 1);
    assert_eq!(view.processed_search, None);
}

#[test]
fn search_summary_counts_jobs() {
    let mut view = JobsView::default();
    let results = SearchResults {
        jobs: vec![job("a")],
        processed_search: Some(ProcessedSearch { original_query: "rust".to_owned(), ..ProcessedSearch::default() }),
        external_links: Vec::new(),
    };

    view.apply(&search_query("rust"), Ok(JobResults::Search(results)));

    assert_eq!(view.summary().as_deref(), Some("Found 1 job matching: \"rust\""));
    assert_eq!(view.empty_hint(), "Try adjusting your search description or filters.");
}

#[test]
fn chip_groups_skip_empty_sections() {
    let processed = ProcessedSearch {
        keywords: Some(vec!["remote".to_owned()]),
        skills: Some(Vec::new()),
        job_title: Some("Backend Engineer".to_owned()),
        search_terms: None,
        ..ProcessedSearch::default()
    };

    let groups = chip_groups(&processed);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].1, vec![SearchChip::Keyword("remote".to_owned())]);
    assert_eq!(groups[1].1, vec![SearchChip::JobTitle("Backend Engineer".to_owned())]);
}
