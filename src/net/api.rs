//! Typed client for the job-board REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is built at startup from `config::api_base_url()` and
//! shared through Leptos context. It has no hidden auth state: every method
//! takes the caller's credential explicitly and the request builder attaches
//! the bearer header.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError` via `ApiError::from_status`; bodies
//! that fail to decode become `ApiError::Decode`. Nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use super::error::ApiError;
use super::http::{ApiRequest, Method, Transport};
use super::types::{
    AdminStats, Application, ApplyRequest, AuthResponse, Credential, Job, JobList, LoginRequest, NewJob,
    Profile, RegisterRequest, ResumeFile, ResumeUpload, SearchResults, User,
};

/// Multipart field name the upload endpoint expects.
const RESUME_FIELD: &str = "resume";

/// Optional listing filters shared by the plain listing and the search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub location: String,
    pub skills: String,
}

/// Outcome of `ApiClient::find_jobs`.
#[derive(Clone, Debug, PartialEq)]
pub enum JobResults {
    /// Plain `GET /jobs` listing (no free-text query).
    Listing(Vec<Job>),
    /// `GET /jobs/search` response with the server's interpretation.
    Search(SearchResults),
}

fn job_endpoint(job_id: &str) -> String {
    format!("/jobs/{job_id}")
}

fn bookmark_endpoint(job_id: &str) -> String {
    format!("/jobs/{job_id}/bookmark")
}

fn resume_endpoint(file_id: &str) -> String {
    format!("/upload/resume/{file_id}")
}

/// REST client over a pluggable `Transport`.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Absolute URL with percent-encoded query parameters; empty values are omitted.
    #[must_use]
    pub fn url_with_query(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        for (key, value) in params {
            if !value.is_empty() {
                query.append_pair(key, value);
                any = true;
            }
        }
        if any { format!("{}?{}", self.url(path), query.finish()) } else { self.url(path) }
    }

    /// Link to a stored resume; `resume_url` is the server-relative path from the profile.
    #[must_use]
    pub fn resume_link(&self, resume_url: &str) -> String {
        self.url(resume_url)
    }

    async fn call(&self, request: ApiRequest) -> Result<String, ApiError> {
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }

    async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let body = self.call(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::new(Method::Post, self.url("/auth/login")).with_json(request)?;
        self.call_json(request).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::new(Method::Post, self.url("/auth/register")).with_json(request)?;
        self.call_json(request).await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` when the credential is expired or invalid.
    pub async fn fetch_me(&self, credential: &Credential) -> Result<User, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url("/auth/me")).with_credential(Some(credential));
        self.call_json(request).await
    }

    // =========================================================================
    // JOBS
    // =========================================================================

    /// `GET /jobs?location&skills`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn list_jobs(&self, filters: &JobFilters, credential: Option<&Credential>) -> Result<Vec<Job>, ApiError> {
        let url = self.url_with_query("/jobs", &[("location", &filters.location), ("skills", &filters.skills)]);
        let request = ApiRequest::new(Method::Get, url).with_credential(credential);
        let list: JobList = self.call_json(request).await?;
        Ok(list.0)
    }

    /// `GET /jobs/search?q&location&skills`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn search_jobs(
        &self,
        query: &str,
        filters: &JobFilters,
        credential: Option<&Credential>,
    ) -> Result<SearchResults, ApiError> {
        let url = self.url_with_query(
            "/jobs/search",
            &[("q", query.trim()), ("location", &filters.location), ("skills", &filters.skills)],
        );
        let request = ApiRequest::new(Method::Get, url).with_credential(credential);
        self.call_json(request).await
    }

    /// Plain listing when `query` is blank, server-side search otherwise.
    ///
    /// # Errors
    ///
    /// Whatever the chosen call returns.
    pub async fn find_jobs(
        &self,
        query: &str,
        filters: &JobFilters,
        credential: Option<&Credential>,
    ) -> Result<JobResults, ApiError> {
        if query.trim().is_empty() {
            self.list_jobs(filters, credential).await.map(JobResults::Listing)
        } else {
            self.search_jobs(query, filters, credential).await.map(JobResults::Search)
        }
    }

    /// `GET /jobs/:id`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status (404 for unknown ids).
    pub async fn fetch_job(&self, job_id: &str, credential: Option<&Credential>) -> Result<Job, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url(&job_endpoint(job_id))).with_credential(credential);
        self.call_json(request).await
    }

    /// `POST /jobs`; returns the created job.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn post_job(&self, job: &NewJob, credential: &Credential) -> Result<Job, ApiError> {
        let request = ApiRequest::new(Method::Post, self.url("/jobs"))
            .with_credential(Some(credential))
            .with_json(job)?;
        self.call_json(request).await
    }

    /// `POST /jobs/:id/bookmark` (server toggles).
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn toggle_bookmark(&self, job_id: &str, credential: &Credential) -> Result<(), ApiError> {
        let request =
            ApiRequest::new(Method::Post, self.url(&bookmark_endpoint(job_id))).with_credential(Some(credential));
        self.call(request).await.map(drop)
    }

    /// `GET /jobs/recommended`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn recommended_jobs(&self, credential: &Credential) -> Result<Vec<Job>, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url("/jobs/recommended")).with_credential(Some(credential));
        let list: JobList = self.call_json(request).await?;
        Ok(list.0)
    }

    // =========================================================================
    // APPLICATIONS
    // =========================================================================

    /// `GET /applications/my-applications`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn my_applications(&self, credential: &Credential) -> Result<Vec<Application>, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url("/applications/my-applications"))
            .with_credential(Some(credential));
        self.call_json(request).await
    }

    /// `POST /applications`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status (e.g. a duplicate application).
    pub async fn apply(&self, application: &ApplyRequest, credential: &Credential) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Post, self.url("/applications"))
            .with_credential(Some(credential))
            .with_json(application)?;
        self.call(request).await.map(drop)
    }

    // =========================================================================
    // PROFILE & RESUME
    // =========================================================================

    /// `GET /users/profile`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn fetch_profile(&self, credential: &Credential) -> Result<Profile, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url("/users/profile")).with_credential(Some(credential));
        self.call_json(request).await
    }

    /// `PUT /users/profile`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn update_profile(&self, profile: &Profile, credential: &Credential) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Put, self.url("/users/profile"))
            .with_credential(Some(credential))
            .with_json(profile)?;
        self.call(request).await.map(drop)
    }

    /// `POST /upload/resume` as multipart form data.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn upload_resume(&self, file: ResumeFile, credential: &Credential) -> Result<ResumeUpload, ApiError> {
        let request = ApiRequest::new(Method::Post, self.url("/upload/resume"))
            .with_credential(Some(credential))
            .with_file(RESUME_FIELD, file);
        self.call_json(request).await
    }

    /// `DELETE /upload/resume/:fileId`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn delete_resume(&self, file_id: &str, credential: &Credential) -> Result<(), ApiError> {
        let request =
            ApiRequest::new(Method::Delete, self.url(&resume_endpoint(file_id))).with_credential(Some(credential));
        self.call(request).await.map(drop)
    }

    // =========================================================================
    // ADMIN
    // =========================================================================

    /// `GET /admin/stats`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status (403 for non-admins).
    pub async fn admin_stats(&self, credential: &Credential) -> Result<AdminStats, ApiError> {
        let request = ApiRequest::new(Method::Get, self.url("/admin/stats")).with_credential(Some(credential));
        self.call_json(request).await
    }
}
