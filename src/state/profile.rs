//! Candidate profile editor state.
//!
//! DESIGN
//! ======
//! The page edits a full `Profile` copy in place. Skills are edited as one
//! comma separated string and only folded back into the list on save, so a
//! half-typed entry never turns into an empty skill.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Certification, Education, LanguageSkill, Profile, ResumeUpload, WorkEntry};
use crate::state::post_job::split_trimmed;
use crate::util::format::date_label;

pub const AVAILABILITY: [&str; 5] = ["Immediately", "1 month", "2 months", "3+ months", "Not looking"];
pub const PROFICIENCY: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "Native"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Personal,
    Professional,
    Education,
    Work,
    Additional,
    Resume,
}

impl ProfileTab {
    pub const ALL: [Self; 6] =
        [Self::Personal, Self::Professional, Self::Education, Self::Work, Self::Additional, Self::Resume];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Professional => "Professional",
            Self::Education => "Education",
            Self::Work => "Work History",
            Self::Additional => "Additional",
            Self::Resume => "Resume",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub profile: Profile,
    pub skills_input: String,
    pub tab: ProfileTab,
}

impl ProfileDraft {
    /// Row dates are cut to `YYYY-MM-DD` so date inputs accept them.
    #[must_use]
    pub fn from_profile(mut profile: Profile) -> Self {
        let skills_input = profile.skills.join(", ");
        for row in &mut profile.education {
            trim_dates(&mut [&mut row.start_date, &mut row.end_date]);
        }
        for row in &mut profile.work_history {
            trim_dates(&mut [&mut row.start_date, &mut row.end_date]);
        }
        for row in &mut profile.certifications {
            trim_dates(&mut [&mut row.issue_date, &mut row.expiry_date]);
        }
        Self { profile, skills_input, tab: ProfileTab::default() }
    }

    /// Body for `PUT /users/profile` with the skills string folded back in.
    #[must_use]
    pub fn to_update(&self) -> Profile {
        Profile { skills: split_trimmed(&self.skills_input, ','), ..self.profile.clone() }
    }

    pub fn add_education(&mut self) {
        self.profile.education.push(Education::default());
    }

    pub fn remove_education(&mut self, index: usize) {
        remove_at(&mut self.profile.education, index);
    }

    pub fn add_work(&mut self) {
        self.profile.work_history.push(WorkEntry::default());
    }

    pub fn remove_work(&mut self, index: usize) {
        remove_at(&mut self.profile.work_history, index);
    }

    pub fn add_certification(&mut self) {
        self.profile.certifications.push(Certification::default());
    }

    pub fn remove_certification(&mut self, index: usize) {
        remove_at(&mut self.profile.certifications, index);
    }

    pub fn add_language(&mut self) {
        self.profile.languages.push(LanguageSkill::default());
    }

    pub fn remove_language(&mut self, index: usize) {
        remove_at(&mut self.profile.languages, index);
    }

    /// Whether a resume is on file (both URL and file name known).
    #[must_use]
    pub fn has_resume(&self) -> bool {
        !self.profile.resume_url.is_empty() && !self.profile.resume_file_name.is_empty()
    }

    pub fn apply_upload(&mut self, upload: ResumeUpload, uploaded_at: Option<String>) {
        self.profile.resume_url = upload.resume_url;
        self.profile.resume_file_name = upload.file_name;
        self.profile.resume_keywords = upload.keywords;
        self.profile.resume_uploaded_at = uploaded_at;
    }

    pub fn clear_resume(&mut self) {
        self.profile.resume_url.clear();
        self.profile.resume_file_name.clear();
        self.profile.resume_keywords.clear();
        self.profile.resume_uploaded_at = None;
    }
}

fn trim_dates(fields: &mut [&mut String]) {
    for field in fields {
        let date = date_label(field).len();
        field.truncate(date);
    }
}

fn remove_at<T>(rows: &mut Vec<T>, index: usize) {
    if index < rows.len() {
        rows.remove(index);
    }
}

/// File id for `DELETE /upload/resume/:fileId`: last path segment, query stripped.
#[must_use]
pub fn resume_file_id(resume_url: &str) -> Option<&str> {
    let last = resume_url.rsplit('/').next().unwrap_or(resume_url);
    let id = last.split('?').next().unwrap_or(last);
    (!id.is_empty() && id != "undefined").then_some(id)
}

/// Parse an optional numeric input; blank or invalid means unset.
#[must_use]
pub fn parse_optional(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
