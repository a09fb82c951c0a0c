//! Client configuration parsed from environment variables.

use std::str::FromStr;

use crate::constants::{self, BuildEnv};
use crate::error::ApiError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Which object endpoint convention the server speaks.
///
/// `Prefixed` nests object routes under `object1/` and lists schemas at
/// `_schemas`; `Flat` serves them from the API root with `_schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    #[default]
    Prefixed,
    Flat,
}

impl FromStr for PathStyle {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "prefixed" => Ok(Self::Prefixed),
            "flat" => Ok(Self::Flat),
            other => Err(ApiError::Config(format!(
                "unsupported path style '{other}' (expected 'prefixed' or 'flat')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base URL, always ending in `/`.
    pub base_url: String,
    /// Origin that relative base URLs are resolved against.
    pub origin: String,
    pub path_style: PathStyle,
    pub timeouts: Timeouts,
}

impl ApiConfig {
    /// Config with default path style and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` is not absolute.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        if !constants::is_absolute(base_url) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            base_url: constants::resolve_base_url(base_url, constants::DEFAULT_ORIGIN)?,
            origin: constants::DEFAULT_ORIGIN.to_owned(),
            path_style: PathStyle::default(),
            timeouts: Timeouts::default(),
        })
    }

    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SKYVIEW_BASE_URL`: absolute API base URL
    /// - `SKYVIEW_ORIGIN`: origin for the build's relative API path, default `http://127.0.0.1:6481`
    /// - `SKYVIEW_PATH_STYLE`: `prefixed` (default) or `flat`
    /// - `SKYVIEW_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SKYVIEW_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be resolved or the path style is unknown.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be resolved or the path style is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let origin = lookup("SKYVIEW_ORIGIN").unwrap_or_else(|| constants::DEFAULT_ORIGIN.to_owned());
        let base_url = match lookup("SKYVIEW_BASE_URL") {
            Some(url) => constants::resolve_base_url(&url, &origin)?,
            None => constants::resolve_base_url(constants::api_path(BuildEnv::current()), &origin)?,
        };

        let path_style = match lookup("SKYVIEW_PATH_STYLE") {
            Some(raw) => raw.parse()?,
            None => PathStyle::default(),
        };

        let timeouts = Timeouts {
            request_secs: parse_u64(&lookup, "SKYVIEW_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(&lookup, "SKYVIEW_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, origin, path_style, timeouts })
    }

    /// Replace the base URL, resolving a relative one against the configured origin.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the result is not absolute.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ApiError> {
        self.base_url = constants::resolve_base_url(base_url, &self.origin)?;
        Ok(())
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
