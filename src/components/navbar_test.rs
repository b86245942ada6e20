use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Grace Brewster Hopper".to_owned(),
        email: "grace@x.io".to_owned(),
        role,
        resume_url: None,
        bookmarks: Vec::new(),
    }
}

fn labels(user: Option<&User>) -> Vec<String> {
    nav_links(user).into_iter().map(|l| l.label).collect()
}

#[test]
fn anonymous_sees_login_and_sign_up() {
    assert_eq!(labels(None), ["Login", "Sign Up"]);
}

#[test]
fn recruiter_gets_post_job_not_recommended() {
    let links = labels(Some(&user(Role::Recruiter)));
    assert!(links.contains(&"Post Job".to_owned()));
    assert!(!links.contains(&"Recommended".to_owned()));
    assert!(!links.contains(&"Admin".to_owned()));
}

#[test]
fn candidate_gets_recommended() {
    let links = labels(Some(&user(Role::Candidate)));
    assert_eq!(links, ["Browse Jobs", "Recommended", "Applications", "Grace"]);
}

#[test]
fn admin_gets_admin_link() {
    let links = nav_links(Some(&user(Role::Admin)));
    assert!(links.iter().any(|l| l.href == "/admin"));
    assert!(!links.iter().any(|l| l.href == "/post-job"));
    assert_eq!(links.last().map(|l| l.href), Some("/profile"));
}
