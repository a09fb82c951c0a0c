//! API base path constants.
//!
//! The base path is fixed at build time by `SKYVIEW_ENV`: `development`
//! points at a local node, anything else means the API is served from the
//! same origin as the client (`/`).

use crate::error::ApiError;

pub const DEVELOPMENT_API_PATH: &str = "http://localhost:6481/";
pub const PRODUCTION_API_PATH: &str = "/";
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:6481";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEnv {
    Development,
    Production,
}

impl BuildEnv {
    /// Map a raw `SKYVIEW_ENV` value to a build environment.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    /// Build environment baked into this binary.
    #[must_use]
    pub fn current() -> Self {
        Self::parse(option_env!("SKYVIEW_ENV"))
    }
}

#[must_use]
pub fn api_path(env: BuildEnv) -> &'static str {
    match env {
        BuildEnv::Development => DEVELOPMENT_API_PATH,
        BuildEnv::Production => PRODUCTION_API_PATH,
    }
}

/// Resolve an API path into an absolute base URL ending in `/`.
///
/// Absolute paths are kept as-is. Relative paths are joined onto `origin`,
/// which must itself be an `http://` or `https://` URL.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBaseUrl`] if neither input is absolute.
pub fn resolve_base_url(api_path: &str, origin: &str) -> Result<String, ApiError> {
    if is_absolute(api_path) {
        return Ok(with_trailing_slash(api_path));
    }
    if !is_absolute(origin) {
        return Err(ApiError::InvalidBaseUrl(origin.to_owned()));
    }

    let path = api_path.trim_start_matches('/');
    Ok(with_trailing_slash(&format!("{}/{path}", origin.trim_end_matches('/'))))
}

pub(crate) fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') { url.to_owned() } else { format!("{url}/") }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod tests;
