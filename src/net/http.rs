//! HTTP transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds fully-formed `ApiRequest`s (URL, bearer header, body)
//! and hands them to a `Transport`. In the browser (hydrate) the transport is
//! `gloo-net`; during SSR there is no backend access and every call reports
//! `TransportError::Unavailable`. Tests plug in a recording fake.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use serde::Serialize;

use super::error::{ApiError, TransportError};
use super::types::{Credential, ResumeFile};

/// HTTP verbs the backend API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// Serialized JSON document.
    Json(String),
    /// Single-file `multipart/form-data` upload.
    Multipart { field: String, file: ResumeFile },
}

/// One outgoing call, complete with its authorization header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// `Authorization` header value, when a credential was supplied.
    pub authorization: Option<String>,
    pub body: Body,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), authorization: None, body: Body::Empty }
    }

    /// Attach `Authorization: Bearer <token>` when a credential is present.
    #[must_use]
    pub fn with_credential(mut self, credential: Option<&Credential>) -> Self {
        self.authorization = credential.map(Credential::bearer);
        self
    }

    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `value` cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Body::Json(json);
        Ok(self)
    }

    #[must_use]
    pub fn with_file(mut self, field: &str, file: ResumeFile) -> Self {
        self.body = Body::Multipart { field: field.to_owned(), file };
        self
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the backend.
pub trait Transport {
    /// Send `request` and return whatever status the server answered with.
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}

/// `gloo-net` transport used by the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            send_with_gloo(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_gloo(request: ApiRequest) -> Result<ApiResponse, TransportError> {
    use gloo_net::http::Request;

    let network = |e: gloo_net::Error| TransportError::Network(e.to_string());

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    if let Some(value) = request.authorization.as_deref() {
        builder = builder.header("Authorization", value);
    }
    let outgoing = match request.body {
        Body::Empty => builder.build().map_err(network)?,
        Body::Json(json) => builder
            .header("Content-Type", "application/json")
            .body(json)
            .map_err(network)?,
        Body::Multipart { field, file } => builder.body(multipart_form(&field, &file)?).map_err(network)?,
    };

    let response = outgoing.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn multipart_form(field: &str, file: &ResumeFile) -> Result<web_sys::FormData, TransportError> {
    let js_err = |e: wasm_bindgen::JsValue| TransportError::Network(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_err)?;
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    form.append_with_blob_and_filename(field, &blob, &file.name).map_err(js_err)?;
    Ok(form)
}
