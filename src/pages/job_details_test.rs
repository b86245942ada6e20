use super::*;

fn application(job: serde_json::Value) -> Application {
    serde_json::from_value(serde_json::json!({ "_id": "a1", "job": job, "status": "pending" })).unwrap()
}

#[test]
fn applied_matches_populated_and_bare_job_refs() {
    let populated = application(serde_json::json!({ "_id": "j1", "title": "Engineer" }));
    let bare = application(serde_json::json!("j2"));
    let applications = vec![populated, bare];

    assert!(has_applied(&applications, "j1"));
    assert!(has_applied(&applications, "j2"));
    assert!(!has_applied(&applications, "j3"));
    assert!(!has_applied(&[], "j1"));
}

#[test]
fn already_applied_replaces_the_form() {
    assert_eq!(apply_panel(Some(Role::Candidate), true, false), ApplyPanel::AlreadyApplied);
    assert_eq!(apply_panel(Some(Role::Candidate), true, true), ApplyPanel::AlreadyApplied);
}

#[test]
fn candidate_opens_the_form_from_the_button() {
    assert_eq!(apply_panel(Some(Role::Candidate), false, false), ApplyPanel::ApplyButton);
    assert_eq!(apply_panel(Some(Role::Candidate), false, true), ApplyPanel::Form);
}

#[test]
fn apply_area_hidden_for_everyone_else() {
    assert_eq!(apply_panel(None, false, true), ApplyPanel::Hidden);
    assert_eq!(apply_panel(Some(Role::Recruiter), false, false), ApplyPanel::Hidden);
    assert_eq!(apply_panel(Some(Role::Admin), true, false), ApplyPanel::Hidden);
}
