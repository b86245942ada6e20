//! Wire DTOs for the job-board REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Backend payloads are loose
//! (explicit nulls, populated-or-id references, optional search metadata), so
//! those shapes are modelled as `Option` fields and untagged enums that
//! screens match on instead of probing properties.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Account role gating access to screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
    Admin,
}

impl Role {
    /// Lowercase wire name, also used for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Recruiter => "recruiter",
            Self::Admin => "admin",
        }
    }
}

/// An authenticated user as returned by `/auth/me`, `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier (accepts Mongo-style `_id`).
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Login email.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Path of the uploaded resume, relative to the API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    /// Bookmarked job ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bookmarks: Vec<String>,
}

/// Bearer token proving an authenticated session.
///
/// `Debug` is redacted so tokens never end up in console diagnostics.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of the login and register endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    /// Missing when the backend accepted the request but issued no session.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

// =============================================================================
// JOBS
// =============================================================================

/// Salary range in thousands of `currency` units.
///
/// Bounds are plain JSON numbers and may be fractional; a bound that is not
/// a number decodes as unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Job poster reference: populated user summary or bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserSummary),
    Id(String),
}

impl UserRef {
    /// Poster name when the backend populated the reference.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated(summary) if !summary.name.is_empty() => Some(&summary.name),
            _ => None,
        }
    }
}

/// Minimal user projection embedded in other records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<Salary>,
    /// Required years of experience; fractional values are kept.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub experience: f64,
    #[serde(default)]
    pub posted_by: Option<UserRef>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /jobs`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub experience: u32,
    pub location: String,
    pub salary: Salary,
}

/// Top-level job array; `null` entries are dropped.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct JobList(#[serde(deserialize_with = "present_items")] pub Vec<Job>);

// =============================================================================
// SEARCH
// =============================================================================

/// Server-side interpretation of a free-text search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedSearch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub intent: String,
    #[serde(rename = "useAI", default, deserialize_with = "null_as_default")]
    pub use_ai: bool,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub search_terms: Option<Vec<String>>,
}

/// How strongly an external job site matches the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    #[serde(other)]
    Standard,
}

impl Relevance {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Highly Relevant",
            Self::Standard => "Relevant",
        }
    }
}

/// Link to an external job board suggested alongside search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub relevance: Option<Relevance>,
}

/// Response of `GET /jobs/search`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default, deserialize_with = "present_items")]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub processed_search: Option<ProcessedSearch>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_links: Vec<ExternalLink>,
}

// =============================================================================
// APPLICATIONS
// =============================================================================

/// Review state of an application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Capitalized badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Shortlisted => "Shortlisted",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// BEM modifier for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "status-badge status-badge--pending",
            Self::Reviewed => "status-badge status-badge--reviewed",
            Self::Shortlisted => "status-badge status-badge--shortlisted",
            Self::Accepted => "status-badge status-badge--accepted",
            Self::Rejected => "status-badge status-badge--rejected",
        }
    }
}

/// Job reference inside an application: populated job or bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobRef {
    Populated(Box<Job>),
    Id(String),
}

impl JobRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Populated(job) => &job.id,
            Self::Id(id) => id,
        }
    }

    #[must_use]
    pub fn job(&self) -> Option<&Job> {
        match self {
            Self::Populated(job) => Some(job),
            Self::Id(_) => None,
        }
    }
}

/// A candidate's application to a job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    pub job: JobRef,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /applications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_id: String,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

// =============================================================================
// PROFILE
// =============================================================================

/// Postal location on a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zip_code: String,
}

/// Expected salary range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryExpectation {
    #[serde(default)]
    pub min: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
    #[serde(default = "default_currency", deserialize_with = "null_as_currency")]
    pub currency: String,
}

impl Default for SalaryExpectation {
    fn default() -> Self {
        Self { min: None, max: None, currency: default_currency() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currently_studying: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currently_working: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expiry_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credential_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credential_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default = "default_proficiency", deserialize_with = "null_as_proficiency")]
    pub proficiency: String,
}

impl Default for LanguageSkill {
    fn default() -> Self {
        Self { language: String::new(), proficiency: default_proficiency() }
    }
}

/// Full candidate profile from `GET /users/profile`, also the body of `PUT /users/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// `YYYY-MM-DD`; the time part of a server timestamp is dropped on load.
    #[serde(default, deserialize_with = "null_as_date")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_history: Vec<WorkEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<LanguageSkill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linked_in: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_job_types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_locations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_expectation: SalaryExpectation,
    #[serde(default = "default_availability", deserialize_with = "null_as_availability")]
    pub availability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume_file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume_keywords: Vec<String>,
    #[serde(default)]
    pub resume_uploaded_at: Option<String>,
    /// Read-only; the backend owns bookmarks through `POST /jobs/:id/bookmark`.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing)]
    pub bookmarks: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            bio: String::new(),
            location: Location::default(),
            skills: Vec::new(),
            experience: 0,
            job_title: String::new(),
            current_company: String::new(),
            education: Vec::new(),
            work_history: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            linked_in: String::new(),
            github: String::new(),
            portfolio: String::new(),
            website: String::new(),
            preferred_job_types: Vec::new(),
            preferred_locations: Vec::new(),
            salary_expectation: SalaryExpectation::default(),
            availability: default_availability(),
            resume_url: String::new(),
            resume_file_name: String::new(),
            resume_keywords: Vec::new(),
            resume_uploaded_at: None,
            bookmarks: Vec::new(),
        }
    }
}

/// Response of `POST /upload/resume`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpload {
    pub resume_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

/// A resume file picked in the browser, ready for multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ResumeFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// Headline counters on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_jobs: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub active_jobs: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_applications: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_recruiters: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_candidates: i64,
}

/// One aggregation bucket (`{ _id, count }`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatBucket {
    /// Bucket key rendered as text (status name, company, ...).
    #[serde(rename = "_id", default, deserialize_with = "deserialize_label")]
    pub label: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub count: i64,
}

/// Response of `GET /admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: StatsOverview,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs_by_status: Vec<StatBucket>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applications_by_status: Vec<StatBucket>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_companies: Vec<StatBucket>,
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn default_currency() -> String {
    "USD".to_owned()
}

fn default_availability() -> String {
    "Immediately".to_owned()
}

fn default_proficiency() -> String {
    "Intermediate".to_owned()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_currency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty_or(Option::<String>::deserialize(deserializer)?, default_currency))
}

fn null_as_availability<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty_or(Option::<String>::deserialize(deserializer)?, default_availability))
}

fn null_as_proficiency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty_or(Option::<String>::deserialize(deserializer)?, default_proficiency))
}

fn non_empty_or(value: Option<String>, fallback: fn() -> String) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(fallback)
}

fn null_as_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.split('T').next().unwrap_or_default().to_owned())
}

/// Any JSON number (or numeric string) as `f64`; anything else is unset.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(number.filter(|v: &f64| v.is_finite()))
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or_default())
}

fn present_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected scalar bucket key")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
