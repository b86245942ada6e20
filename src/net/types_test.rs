use super::*;

// =============================================================
// Identity
// =============================================================

#[test]
fn user_accepts_mongo_id_and_null_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u-1",
        "name": "Ada Lovelace",
        "email": null,
        "role": "recruiter",
        "bookmarks": null,
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, "");
    assert_eq!(user.role, Role::Recruiter);
    assert!(user.bookmarks.is_empty());
    assert_eq!(user.resume_url, None);
}

#[test]
fn user_rejects_unknown_role() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": "u-1",
        "role": "superuser",
    }));
    assert!(result.is_err());
}

#[test]
fn role_wire_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Candidate).unwrap(), "\"candidate\"");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn credential_debug_is_redacted() {
    let credential = Credential::new("secret-token");
    assert_eq!(format!("{credential:?}"), "Credential(..)");
    assert_eq!(credential.bearer(), "Bearer secret-token");
}

#[test]
fn auth_response_without_token_decodes() {
    let response: AuthResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert_eq!(response.token, None);
    assert_eq!(response.user, None);
}

// =============================================================
// Jobs
// =============================================================

#[test]
fn job_decodes_populated_poster_and_salary() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "_id": "j-1",
        "title": "Rust Engineer",
        "company": "Ferrous",
        "description": "Build things",
        "requirements": null,
        "skills": ["rust", "wasm"],
        "location": "Remote",
        "salary": { "min": 80, "max": 120, "currency": "EUR" },
        "experience": 3,
        "postedBy": { "_id": "u-9", "name": "Grace" },
        "createdAt": "2024-05-01T10:00:00.000Z",
    }))
    .unwrap();
    assert!(job.requirements.is_empty());
    assert_eq!(job.salary.as_ref().and_then(|s| s.max), Some(120.0));
    assert_eq!(job.posted_by.as_ref().and_then(UserRef::name), Some("Grace"));
}

#[test]
fn job_poster_may_be_a_bare_id() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "_id": "j-1",
        "postedBy": "u-9",
    }))
    .unwrap();
    assert_eq!(job.posted_by, Some(UserRef::Id("u-9".to_owned())));
    assert_eq!(job.posted_by.as_ref().and_then(UserRef::name), None);
    assert_eq!(job.experience, 0.0);
}

#[test]
fn job_list_drops_null_entries() {
    let list: JobList = serde_json::from_str(r#"[{"_id":"a"},null,{"_id":"b"}]"#).unwrap();
    let ids: Vec<&str> = list.0.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn new_job_serializes_salary_without_missing_bounds() {
    let job = NewJob {
        title: "T".to_owned(),
        company: "C".to_owned(),
        description: "D".to_owned(),
        requirements: vec![],
        skills: vec!["rust".to_owned()],
        experience: 2,
        location: String::new(),
        salary: Salary { min: Some(80.0), max: None, currency: Some("USD".to_owned()) },
    };
    let value = serde_json::to_value(&job).unwrap();
    assert_eq!(value["salary"], serde_json::json!({ "min": 80.0, "currency": "USD" }));
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_results_decode_processed_search() {
    let results: SearchResults = serde_json::from_value(serde_json::json!({
        "jobs": [{ "_id": "j-1" }, null],
        "processedSearch": {
            "originalQuery": "remote rust",
            "intent": "Remote Rust roles",
            "useAI": true,
            "keywords": ["remote"],
            "jobTitle": "Rust Developer",
        },
        "externalLinks": [
            { "url": "https://jobs.example", "source": "Example", "description": "d", "relevance": "high" },
            { "url": "https://other.example", "source": "Other", "description": "d", "relevance": "medium" },
        ],
    }))
    .unwrap();
    assert_eq!(results.jobs.len(), 1);
    let processed = results.processed_search.unwrap();
    assert!(processed.use_ai);
    assert_eq!(processed.job_title.as_deref(), Some("Rust Developer"));
    assert_eq!(processed.skills, None);
    assert_eq!(results.external_links[0].relevance, Some(Relevance::High));
    assert_eq!(results.external_links[1].relevance, Some(Relevance::Standard));
    assert_eq!(Relevance::Standard.label(), "Relevant");
}

#[test]
fn search_results_tolerate_missing_sections() {
    let results: SearchResults = serde_json::from_str("{}").unwrap();
    assert!(results.jobs.is_empty());
    assert!(results.processed_search.is_none());
    assert!(results.external_links.is_empty());
}

// =============================================================
// Applications
// =============================================================

#[test]
fn application_job_ref_reads_populated_or_bare_id() {
    let populated: Application = serde_json::from_value(serde_json::json!({
        "_id": "a-1",
        "job": { "_id": "j-1", "title": "Rust Engineer" },
        "status": "shortlisted",
    }))
    .unwrap();
    let bare: Application = serde_json::from_value(serde_json::json!({
        "_id": "a-2",
        "job": "j-2",
    }))
    .unwrap();
    assert_eq!(populated.job.id(), "j-1");
    assert_eq!(populated.job.job().map(|job| job.title.as_str()), Some("Rust Engineer"));
    assert_eq!(populated.status, ApplicationStatus::Shortlisted);
    assert_eq!(bare.job.id(), "j-2");
    assert_eq!(bare.status, ApplicationStatus::Pending);
}

#[test]
fn application_status_labels_are_capitalized() {
    assert_eq!(ApplicationStatus::Accepted.label(), "Accepted");
    assert!(ApplicationStatus::Rejected.badge_class().ends_with("--rejected"));
}

#[test]
fn apply_request_omits_missing_resume() {
    let request = ApplyRequest {
        job_id: "j-1".to_owned(),
        cover_letter: "Hi".to_owned(),
        resume_url: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "jobId": "j-1", "coverLetter": "Hi" })
    );
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_fills_defaults_for_nulls() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "name": "Ada",
        "phone": null,
        "dateOfBirth": "1990-12-10T00:00:00.000Z",
        "location": null,
        "salaryExpectation": { "min": 50000, "currency": null },
        "availability": null,
        "languages": [{ "language": "French", "proficiency": null }],
        "bookmarks": ["j-1"],
    }))
    .unwrap();
    assert_eq!(profile.phone, "");
    assert_eq!(profile.date_of_birth, "1990-12-10");
    assert_eq!(profile.location, Location::default());
    assert_eq!(profile.salary_expectation.min, Some(50000));
    assert_eq!(profile.salary_expectation.currency, "USD");
    assert_eq!(profile.availability, "Immediately");
    assert_eq!(profile.languages[0].proficiency, "Intermediate");
    assert_eq!(profile.bookmarks, vec!["j-1".to_owned()]);
}

#[test]
fn profile_update_body_never_sends_bookmarks() {
    let profile = Profile { bookmarks: vec!["j-1".to_owned()], ..Profile::default() };
    let value = serde_json::to_value(&profile).unwrap();
    assert!(value.get("bookmarks").is_none());
    assert_eq!(value["linkedIn"], "");
    assert_eq!(value["workHistory"], serde_json::json!([]));
}

// =============================================================
// Admin
// =============================================================

#[test]
fn admin_stats_accept_float_counts_and_scalar_keys() {
    let stats: AdminStats = serde_json::from_value(serde_json::json!({
        "overview": { "totalJobs": 12.0, "activeJobs": 9, "totalUsers": 40 },
        "jobsByStatus": [{ "_id": true, "count": 9 }, { "_id": null, "count": 3 }],
        "applicationsByStatus": [{ "_id": "pending", "count": 5 }],
    }))
    .unwrap();
    assert_eq!(stats.overview.total_jobs, 12);
    assert_eq!(stats.overview.total_candidates, 0);
    assert_eq!(stats.jobs_by_status[0].label, "true");
    assert_eq!(stats.jobs_by_status[1].label, "");
    assert!(stats.top_companies.is_empty());
}

#[test]
fn admin_stats_reject_fractional_counts() {
    let result = serde_json::from_value::<StatBucket>(serde_json::json!({ "_id": "x", "count": 1.5 }));
    assert!(result.is_err());
}
