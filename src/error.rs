//! Errors produced by the Skyhash API client.
//!
//! Variants carry rendered strings rather than source errors so the enum
//! stays `Clone` and can be parked inside a view's failed state.

/// Errors produced by client configuration and API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The base URL is neither absolute nor resolvable against an origin.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A caller-supplied argument was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON shape we expected.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// A management call came back with a status envelope other than the
    /// expected one. `detail` is the server's human-readable message.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
}

impl ApiError {
    /// Stable machine-readable code for logs and scripted callers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBaseUrl(_) => "E_INVALID_BASE_URL",
            Self::InvalidArgument(_) => "E_INVALID_ARGUMENT",
            Self::Config(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_API_REQUEST",
            Self::Status { .. } => "E_API_STATUS",
            Self::Parse(_) => "E_API_PARSE",
            Self::Rejected { .. } => "E_REJECTED",
        }
    }

    /// Whether re-issuing the same request could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
