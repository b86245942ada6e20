use futures::executor::block_on;

use super::*;
use crate::net::fake::FakeTransport;
use crate::net::http::Body;
use crate::net::types::Role;

fn client(fake: FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new("http://localhost:5000/api/", fake)
}

const JOB: &str = r#"{"_id":"j1","title":"Rust Engineer","company":"Acme","skills":["rust"],"experience":3}"#;

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = client(FakeTransport::default());
    assert_eq!(api.base_url(), "http://localhost:5000/api");
    assert_eq!(api.url("/jobs"), "http://localhost:5000/api/jobs");
}

#[test]
fn query_omits_empty_params_and_encodes_values() {
    let api = client(FakeTransport::default());
    assert_eq!(api.url_with_query("/jobs", &[("location", ""), ("skills", "")]), "http://localhost:5000/api/jobs");
    assert_eq!(
        api.url_with_query("/jobs/search", &[("q", "rust & go"), ("location", "New York")]),
        "http://localhost:5000/api/jobs/search?q=rust+%26+go&location=New+York"
    );
}

#[test]
fn blank_query_issues_plain_listing() {
    let api = client(FakeTransport::reply(200, &format!("[{JOB},null]")));
    let filters = JobFilters { location: "Remote".to_owned(), skills: String::new() };

    let results = block_on(api.find_jobs("   ", &filters, None)).unwrap();

    let JobResults::Listing(jobs) = results else { panic!("expected listing") };
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Rust Engineer");
    let request = api.transport().last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://localhost:5000/api/jobs?location=Remote");
}

#[test]
fn fractional_numbers_do_not_sink_the_listing() {
    let body = r#"[{"_id":"j1","salary":{"min":85.5,"max":120}},{"_id":"j2","experience":1.5,"salary":{"min":"n/a"}}]"#;
    let api = client(FakeTransport::reply(200, body));

    let jobs = block_on(api.list_jobs(&JobFilters::default(), None)).unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].salary.as_ref().and_then(|s| s.min), Some(85.5));
    assert_eq!(jobs[0].salary.as_ref().and_then(|s| s.max), Some(120.0));
    assert_eq!(jobs[1].experience, 1.5);
    assert_eq!(jobs[1].salary.as_ref().and_then(|s| s.min), None);
}

#[test]
fn non_blank_query_issues_search() {
    let body = format!(
        r#"{{"jobs":[{JOB}],"processedSearch":{{"originalQuery":"rust","intent":"find rust jobs","useAI":true}}}}"#
    );
    let api = client(FakeTransport::reply(200, &body));

    let results = block_on(api.find_jobs(" rust ", &JobFilters::default(), None)).unwrap();

    let JobResults::Search(search) = results else { panic!("expected search") };
    assert_eq!(search.jobs.len(), 1);
    assert!(search.processed_search.is_some_and(|p| p.use_ai));
    assert_eq!(api.transport().last().url, "http://localhost:5000/api/jobs/search?q=rust");
}

#[test]
fn authenticated_calls_carry_bearer_header() {
    let api = client(FakeTransport::reply(200, "[]"));
    let credential = Credential::new("abc");

    let jobs = block_on(api.recommended_jobs(&credential)).unwrap();

    assert!(jobs.is_empty());
    let request = api.transport().last();
    assert_eq!(request.url, "http://localhost:5000/api/jobs/recommended");
    assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
}

#[test]
fn anonymous_listing_sends_no_header() {
    let api = client(FakeTransport::reply(200, "[]"));
    block_on(api.list_jobs(&JobFilters::default(), None)).unwrap();
    assert_eq!(api.transport().last().authorization, None);
}

#[test]
fn login_posts_json_without_credential() {
    let api = client(FakeTransport::reply(
        200,
        r#"{"token":"t1","user":{"_id":"u1","name":"Ada","email":"ada@x.io","role":"candidate"}}"#,
    ));
    let request = LoginRequest { email: "ada@x.io".to_owned(), password: "pw".to_owned() };

    let response = block_on(api.login(&request)).unwrap();

    assert_eq!(response.token.as_deref(), Some("t1"));
    assert_eq!(response.user.map(|u| u.role), Some(Role::Candidate));
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.authorization, None);
    assert_eq!(sent.body, Body::Json(r#"{"email":"ada@x.io","password":"pw"}"#.to_owned()));
}

#[test]
fn unauthorized_status_is_classified() {
    let api = client(FakeTransport::reply(401, r#"{"message":"Token is not valid"}"#));
    let err = block_on(api.fetch_me(&Credential::new("stale"))).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Token is not valid"));
}

#[test]
fn duplicate_application_keeps_server_message() {
    let api = client(FakeTransport::reply(400, r#"{"message":"You have already applied for this job"}"#));
    let application =
        ApplyRequest { job_id: "j1".to_owned(), cover_letter: "Hello".to_owned(), resume_url: None };

    let err = block_on(api.apply(&application, &Credential::new("t"))).unwrap_err();

    assert_eq!(err.user_message("Error applying for job"), "You have already applied for this job");
    assert_eq!(api.transport().last().url, "http://localhost:5000/api/applications");
}

#[test]
fn transport_failure_is_unreachable() {
    let api = client(FakeTransport::default());
    let err = block_on(api.fetch_job("j1", None)).unwrap_err();
    assert!(err.is_unreachable());
    assert_eq!(api.transport().last().url, "http://localhost:5000/api/jobs/j1");
}

#[test]
fn undecodable_body_is_decode_error() {
    let api = client(FakeTransport::reply(200, "<html></html>"));
    let err = block_on(api.admin_stats(&Credential::new("t"))).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn bookmark_and_resume_endpoints() {
    let fake = FakeTransport::reply(200, "{}");
    fake.push(200, r#"{"message":"Resume deleted"}"#);
    let api = client(fake);
    let credential = Credential::new("t");

    block_on(api.toggle_bookmark("j9", &credential)).unwrap();
    block_on(api.delete_resume("cv-123.pdf", &credential)).unwrap();

    let requests = api.transport().requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://localhost:5000/api/jobs/j9/bookmark");
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, "http://localhost:5000/api/upload/resume/cv-123.pdf");
}

#[test]
fn resume_upload_is_multipart_under_resume_field() {
    let api = client(FakeTransport::reply(
        200,
        r#"{"resumeUrl":"/uploads/cv.pdf","fileName":"cv.pdf","keywords":["rust"]}"#,
    ));
    let file = ResumeFile { name: "cv.pdf".to_owned(), content_type: "application/pdf".to_owned(), bytes: vec![7] };

    let upload = block_on(api.upload_resume(file, &Credential::new("t"))).unwrap();

    assert_eq!(upload.resume_url, "/uploads/cv.pdf");
    let sent = api.transport().last();
    assert!(matches!(sent.body, Body::Multipart { ref field, .. } if field == "resume"));
    assert_eq!(api.resume_link(&upload.resume_url), "http://localhost:5000/api/uploads/cv.pdf");
}

#[test]
fn profile_update_is_put() {
    let api = client(FakeTransport::reply(200, "{}"));
    let profile = Profile { name: "Ada".to_owned(), ..Profile::default() };

    block_on(api.update_profile(&profile, &Credential::new("t"))).unwrap();

    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://localhost:5000/api/users/profile");
    let Body::Json(json) = sent.body else { panic!("expected json body") };
    assert!(json.contains(r#""name":"Ada""#));
    assert!(!json.contains("bookmarks"));
}
