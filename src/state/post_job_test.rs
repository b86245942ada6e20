use super::*;
use crate::util::format::salary_range;

#[test]
fn draft_lists_are_split_and_trimmed() {
    let draft = PostJobDraft {
        requirements: "  3 years Rust \n\n Async experience\n".to_owned(),
        skills: "rust, tokio,, axum ".to_owned(),
        ..PostJobDraft::default()
    };

    let job = draft.to_new_job();

    assert_eq!(job.requirements, vec!["3 years Rust", "Async experience"]);
    assert_eq!(job.skills, vec!["rust", "tokio", "axum"]);
}

#[test]
fn experience_falls_back_to_zero() {
    let mut draft = PostJobDraft { experience: "five".to_owned(), ..PostJobDraft::default() };
    assert_eq!(draft.to_new_job().experience, 0);
    draft.experience = " 4 ".to_owned();
    assert_eq!(draft.to_new_job().experience, 4);
}

#[test]
fn salary_bounds_are_optional() {
    let draft = PostJobDraft {
        salary_min: "80".to_owned(),
        salary_max: String::new(),
        currency: "EUR".to_owned(),
        ..PostJobDraft::default()
    };

    let salary = draft.to_new_job().salary;

    assert_eq!(salary, Salary { min: Some(80.0), max: None, currency: Some("EUR".to_owned()) });
}

#[test]
fn default_currency_is_usd() {
    assert_eq!(PostJobDraft::default().currency, "USD");
    assert_eq!(PostJobDraft::default().to_new_job().salary.currency.as_deref(), Some("USD"));
}

#[test]
fn posted_salary_reads_back_with_currency() {
    let draft = PostJobDraft {
        salary_min: "80".to_owned(),
        salary_max: "120".to_owned(),
        currency: "USD".to_owned(),
        ..PostJobDraft::default()
    };

    let salary = draft.to_new_job().salary;

    assert_eq!(salary_range(&salary, true).as_deref(), Some("80K - 120K USD"));
}
