//! Shared HTTP plumbing for the API services.
//!
//! DESIGN
//! ======
//! One `reqwest::Client` per process, cloned into each service. Every
//! request carries `Content-Type: application/x-www-form-urlencoded`
//! regardless of method, matching what the server expects. Parsing is kept
//! in pure functions so it can be tested without a socket.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

/// Raw status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Send a request and return status plus body text without judging either.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if no response could be read.
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<RawResponse, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");

        let request = self.http.request(method.clone(), &url);
        let request = match body {
            Some(body) => request.body(body),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "api request failed");
            ApiError::Request(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        tracing::debug!(%method, %url, status, bytes = body.len(), "api response");
        Ok(RawResponse { status, body })
    }

    /// `GET` a path and parse the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or malformed JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let raw = self.send(Method::GET, path, None).await?;
        expect_json(&raw)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Join a base URL and a relative path with exactly one `/` between them.
/// A trailing slash on `path` is preserved.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Percent-encode one path parameter so `/`, `?` and `#` stay inside it.
#[must_use]
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Reject non-2xx responses, then parse the body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] or [`ApiError::Parse`].
pub fn expect_json<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    if !raw.is_success() {
        tracing::warn!(status = raw.status, "api returned error status");
        return Err(ApiError::Status { status: raw.status, body: raw.body.clone() });
    }
    parse_json(&raw.body)
}

/// # Errors
///
/// Returns [`ApiError::Parse`] if `body` is not JSON of the expected shape.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "api response parse failed");
        ApiError::Parse(e.to_string())
    })
}

/// Reject blank path parameters before they turn into a malformed URL.
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(())
}
