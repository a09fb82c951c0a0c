//! Node manager service: nodes, subscriptions and subscribers.
//!
//! ERROR HANDLING
//! ==============
//! Reads fail on any non-2xx status. Mutating calls answer with a
//! [`JsonResponse`] envelope even on failure, so the envelope is parsed
//! first and its `status` decides the outcome; its `detail` is what a user
//! sees when the call is rejected.

use reqwest::Method;

use super::http::{HttpApi, RawResponse, parse_json, require_non_empty, segment};
use super::types::{JsonResponse, NewSubscription, Node, Subscription};
use crate::error::ApiError;

#[cfg(test)]
#[path = "skywire_test.rs"]
mod skywire_test;

const MANAGER_ENDPOINT: &str = "manager";
const NODES_ENDPOINT: &str = "manager/nodes/";

/// Node manager operations. Enables fake managers in view tests.
#[async_trait::async_trait]
pub trait NodeManager: Send + Sync {
    /// Plain-text greeting served by the manager root.
    async fn manager_info(&self) -> Result<String, ApiError>;

    async fn get_nodes(&self) -> Result<Vec<Node>, ApiError>;

    async fn get_node(&self, node_id: &str) -> Result<Node, ApiError>;

    async fn get_subscriptions(&self, node_id: &str) -> Result<Vec<Subscription>, ApiError>;

    async fn get_subscribers(&self, node_id: &str) -> Result<Vec<Subscription>, ApiError>;

    async fn get_subscription(&self, node_id: &str, pub_key: &str) -> Result<Subscription, ApiError>;

    async fn get_subscriber(&self, node_id: &str, pub_key: &str) -> Result<Subscription, ApiError>;

    /// Create a node, from `sec_key` when non-empty or with a fresh key pair.
    async fn create_node(&self, sec_key: &str) -> Result<JsonResponse, ApiError>;

    async fn terminate_node(&self, node_id: &str) -> Result<JsonResponse, ApiError>;

    async fn add_subscription(&self, node_id: &str, subscription: &NewSubscription) -> Result<JsonResponse, ApiError>;

    async fn terminate_subscription(&self, node_id: &str, pub_key: &str) -> Result<JsonResponse, ApiError>;

    async fn terminate_subscriber(&self, node_id: &str, pub_key: &str) -> Result<JsonResponse, ApiError>;
}

// =============================================================================
// REQUEST/RESPONSE HELPERS
// =============================================================================

pub(crate) fn node_endpoint(node_id: &str) -> String {
    format!("{NODES_ENDPOINT}{}", segment(node_id))
}

pub(crate) fn subscriptions_endpoint(node_id: &str) -> String {
    format!("{NODES_ENDPOINT}{}/subscriptions", segment(node_id))
}

pub(crate) fn subscription_endpoint(node_id: &str, pub_key: &str) -> String {
    format!("{}/{}", subscriptions_endpoint(node_id), segment(pub_key))
}

pub(crate) fn subscribers_endpoint(node_id: &str) -> String {
    format!("{NODES_ENDPOINT}{}/subscribers", segment(node_id))
}

pub(crate) fn subscriber_endpoint(node_id: &str, pub_key: &str) -> String {
    format!("{}/{}", subscribers_endpoint(node_id), segment(pub_key))
}

/// Body for node creation: empty when no key is given, else `{"secKey":...}`.
#[must_use]
pub fn create_node_body(sec_key: &str) -> String {
    if sec_key.is_empty() {
        return String::new();
    }
    serde_json::json!({ "secKey": sec_key }).to_string()
}

/// Interpret a management response envelope.
///
/// The server always sets `status` on an envelope, so a body without one
/// (a proxy error page, an unrelated JSON object) falls back to plain status
/// handling.
pub(crate) fn read_envelope(raw: &RawResponse, expected: u16) -> Result<JsonResponse, ApiError> {
    let envelope = match parse_json::<JsonResponse>(&raw.body) {
        Ok(envelope) if envelope.status != 0 => envelope,
        _ if !raw.is_success() => {
            return Err(ApiError::Status { status: raw.status, body: raw.body.clone() });
        }
        Ok(_) => return Err(ApiError::Parse("response has no status envelope".into())),
        Err(err) => return Err(err),
    };

    if envelope.status != expected {
        tracing::warn!(status = envelope.status, detail = %envelope.detail, "node manager rejected request");
        return Err(ApiError::Rejected { status: envelope.status, detail: envelope.detail });
    }
    Ok(envelope)
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Debug, Clone)]
pub struct SkyWireService {
    api: HttpApi,
}

impl SkyWireService {
    #[must_use]
    pub fn new(api: HttpApi) -> Self {
        Self { api }
    }

    async fn mutate(&self, method: Method, path: &str, body: Option<String>, expected: u16) -> Result<JsonResponse, ApiError> {
        let raw = self.api.send(method, path, body).await?;
        read_envelope(&raw, expected)
    }
}

#[async_trait::async_trait]
impl NodeManager for SkyWireService {
    async fn manager_info(&self) -> Result<String, ApiError> {
        let raw = self.api.send(Method::GET, MANAGER_ENDPOINT, None).await?;
        if !raw.is_success() {
            return Err(ApiError::Status { status: raw.status, body: raw.body });
        }
        Ok(raw.body)
    }

    async fn get_nodes(&self) -> Result<Vec<Node>, ApiError> {
        self.api.get_json(NODES_ENDPOINT).await
    }

    async fn get_node(&self, node_id: &str) -> Result<Node, ApiError> {
        require_non_empty(node_id, "node id")?;
        self.api.get_json(&node_endpoint(node_id)).await
    }

    async fn get_subscriptions(&self, node_id: &str) -> Result<Vec<Subscription>, ApiError> {
        require_non_empty(node_id, "node id")?;
        self.api.get_json(&subscriptions_endpoint(node_id)).await
    }

    async fn get_subscribers(&self, node_id: &str) -> Result<Vec<Subscription>, ApiError> {
        require_non_empty(node_id, "node id")?;
        self.api.get_json(&subscribers_endpoint(node_id)).await
    }

    async fn get_subscription(&self, node_id: &str, pub_key: &str) -> Result<Subscription, ApiError> {
        require_non_empty(node_id, "node id")?;
        require_non_empty(pub_key, "subscription key")?;
        self.api.get_json(&subscription_endpoint(node_id, pub_key)).await
    }

    async fn get_subscriber(&self, node_id: &str, pub_key: &str) -> Result<Subscription, ApiError> {
        require_non_empty(node_id, "node id")?;
        require_non_empty(pub_key, "subscriber key")?;
        self.api.get_json(&subscriber_endpoint(node_id, pub_key)).await
    }

    async fn create_node(&self, sec_key: &str) -> Result<JsonResponse, ApiError> {
        let response = self
            .mutate(Method::POST, NODES_ENDPOINT, Some(create_node_body(sec_key)), 200)
            .await?;
        tracing::info!(from_key = !sec_key.is_empty(), "node created");
        Ok(response)
    }

    async fn terminate_node(&self, node_id: &str) -> Result<JsonResponse, ApiError> {
        require_non_empty(node_id, "node id")?;
        self.mutate(Method::DELETE, &node_endpoint(node_id), None, 200).await
    }

    async fn add_subscription(&self, node_id: &str, subscription: &NewSubscription) -> Result<JsonResponse, ApiError> {
        require_non_empty(node_id, "node id")?;
        require_non_empty(&subscription.ip, "subscription address")?;
        let body = serde_json::to_string(subscription).map_err(|e| ApiError::InvalidArgument(e.to_string()))?;
        self.mutate(Method::POST, &subscriptions_endpoint(node_id), Some(body), 201)
            .await
    }

    async fn terminate_subscription(&self, node_id: &str, pub_key: &str) -> Result<JsonResponse, ApiError> {
        require_non_empty(node_id, "node id")?;
        require_non_empty(pub_key, "subscription key")?;
        self.mutate(Method::DELETE, &subscription_endpoint(node_id, pub_key), None, 200)
            .await
    }

    async fn terminate_subscriber(&self, node_id: &str, pub_key: &str) -> Result<JsonResponse, ApiError> {
        require_non_empty(node_id, "node id")?;
        require_non_empty(pub_key, "subscriber key")?;
        self.mutate(Method::DELETE, &subscriber_endpoint(node_id, pub_key), None, 200)
            .await
    }
}
