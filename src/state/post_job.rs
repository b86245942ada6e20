//! Post-job form draft.

#[cfg(test)]
#[path = "post_job_test.rs"]
mod post_job_test;

use crate::net::types::{NewJob, Salary};

/// Currencies offered by the salary selector.
pub const CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "INR"];

/// Raw form fields as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostJobDraft {
    pub title: String,
    pub company: String,
    pub description: String,
    /// One requirement per line.
    pub requirements: String,
    /// Comma separated.
    pub skills: String,
    pub experience: String,
    pub location: String,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
}

impl Default for PostJobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            description: String::new(),
            requirements: String::new(),
            skills: String::new(),
            experience: "0".to_owned(),
            location: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            currency: CURRENCIES[0].to_owned(),
        }
    }
}

impl PostJobDraft {
    /// Request body for `POST /jobs`.
    #[must_use]
    pub fn to_new_job(&self) -> NewJob {
        NewJob {
            title: self.title.clone(),
            company: self.company.clone(),
            description: self.description.clone(),
            requirements: split_trimmed(&self.requirements, '\n'),
            skills: split_trimmed(&self.skills, ','),
            experience: self.experience.trim().parse().unwrap_or(0),
            location: self.location.clone(),
            salary: Salary {
                min: parse_bound(&self.salary_min),
                max: parse_bound(&self.salary_max),
                currency: Some(self.currency.clone()),
            },
        }
    }
}

/// Split on `sep`, trim each piece and drop empties.
#[must_use]
pub fn split_trimmed(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep).map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse().ok().filter(|v: &f64| v.is_finite())
}
