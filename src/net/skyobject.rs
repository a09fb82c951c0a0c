//! Object store service: statistics, schemas, objects, sync and create.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two endpoint conventions exist on deployed servers (see [`PathStyle`]).
//! Endpoint construction lives in pure functions keyed by style so the
//! service methods stay one line of routing plus one request.

use reqwest::Method;
use serde_json::Value;

use super::http::{HttpApi, require_non_empty, segment};
use super::types::{Schema, Statistic};
use crate::config::PathStyle;
use crate::error::ApiError;

#[cfg(test)]
#[path = "skyobject_test.rs"]
mod skyobject_test;

// =============================================================================
// TRAIT
// =============================================================================

/// Object store operations. Enables fake stores in view tests.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_statistic(&self) -> Result<Statistic, ApiError>;

    async fn get_schema_list(&self) -> Result<Vec<Schema>, ApiError>;

    /// Fetch one schema. `name` must be non-empty.
    async fn get_schema(&self, name: &str) -> Result<Schema, ApiError>;

    async fn get_object_list(&self, schema: &str) -> Result<Vec<Value>, ApiError>;

    async fn get_object(&self, schema: &str, id: &str) -> Result<Value, ApiError>;

    /// Ask the server to synchronize an object. The response body is ignored.
    async fn sync_object(&self, id: &str) -> Result<(), ApiError>;

    async fn object_info(&self, id: &str) -> Result<Value, ApiError>;

    /// Create a new object. No uniqueness check on `name` client-side.
    async fn create(&self, schema: &str, name: &str) -> Result<Value, ApiError>;
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn object_root(style: PathStyle) -> &'static str {
    match style {
        PathStyle::Prefixed => "object1/",
        PathStyle::Flat => "",
    }
}

pub(crate) fn statistic_endpoint(style: PathStyle) -> String {
    format!("{}_stat", object_root(style))
}

pub(crate) fn schema_list_endpoint(style: PathStyle) -> String {
    match style {
        PathStyle::Prefixed => format!("{}_schemas", object_root(style)),
        PathStyle::Flat => format!("{}_schema", object_root(style)),
    }
}

pub(crate) fn schema_endpoint(style: PathStyle, name: &str) -> String {
    format!("{}{}/schema", object_root(style), segment(name))
}

pub(crate) fn object_list_endpoint(style: PathStyle, schema: &str) -> String {
    format!("{}{}/list", object_root(style), segment(schema))
}

pub(crate) fn object_endpoint(style: PathStyle, schema: &str, id: &str) -> String {
    format!("{}{}/list/{}", object_root(style), segment(schema), segment(id))
}

pub(crate) fn sync_endpoint(style: PathStyle, id: &str) -> String {
    format!("{}sync/{}", object_root(style), segment(id))
}

pub(crate) fn create_endpoint(style: PathStyle, schema: &str, name: &str) -> String {
    format!("{}create/{}/{}", object_root(style), segment(schema), segment(name))
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Debug, Clone)]
pub struct SkyObjectService {
    api: HttpApi,
    style: PathStyle,
}

impl SkyObjectService {
    #[must_use]
    pub fn new(api: HttpApi, style: PathStyle) -> Self {
        Self { api, style }
    }

    #[must_use]
    pub fn path_style(&self) -> PathStyle {
        self.style
    }
}

#[async_trait::async_trait]
impl ObjectStore for SkyObjectService {
    async fn get_statistic(&self) -> Result<Statistic, ApiError> {
        self.api.get_json(&statistic_endpoint(self.style)).await
    }

    async fn get_schema_list(&self) -> Result<Vec<Schema>, ApiError> {
        self.api.get_json(&schema_list_endpoint(self.style)).await
    }

    async fn get_schema(&self, name: &str) -> Result<Schema, ApiError> {
        require_non_empty(name, "schema name")?;
        self.api.get_json(&schema_endpoint(self.style, name)).await
    }

    async fn get_object_list(&self, schema: &str) -> Result<Vec<Value>, ApiError> {
        require_non_empty(schema, "schema name")?;
        self.api.get_json(&object_list_endpoint(self.style, schema)).await
    }

    async fn get_object(&self, schema: &str, id: &str) -> Result<Value, ApiError> {
        require_non_empty(schema, "schema name")?;
        require_non_empty(id, "object id")?;
        self.api.get_json(&object_endpoint(self.style, schema, id)).await
    }

    async fn sync_object(&self, id: &str) -> Result<(), ApiError> {
        require_non_empty(id, "object id")?;
        let raw = self
            .api
            .send(Method::POST, &sync_endpoint(self.style, id), None)
            .await?;
        if !raw.is_success() {
            tracing::warn!(%id, status = raw.status, "object sync rejected");
            return Err(ApiError::Status { status: raw.status, body: raw.body });
        }
        tracing::info!(%id, "object sync requested");
        Ok(())
    }

    async fn object_info(&self, id: &str) -> Result<Value, ApiError> {
        require_non_empty(id, "object id")?;
        self.api.get_json(&sync_endpoint(self.style, id)).await
    }

    async fn create(&self, schema: &str, name: &str) -> Result<Value, ApiError> {
        require_non_empty(schema, "schema name")?;
        require_non_empty(name, "object name")?;
        let raw = self
            .api
            .send(Method::POST, &create_endpoint(self.style, schema, name), None)
            .await?;
        super::http::expect_json(&raw)
    }
}
