//! Wire types for the object store and node manager APIs.
//!
//! DESIGN
//! ======
//! Every record is a plain DTO. Missing members default instead of failing
//! so a partially populated server response still renders. Opaque objects
//! (object lists, single objects, sync info) stay `serde_json::Value`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

// =============================================================================
// OBJECT STORE
// =============================================================================

/// Object count and memory usage reported by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default)]
    pub total: u64,
    /// Bytes.
    #[serde(default)]
    pub memory: u64,
}

/// A named object type with ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Non-empty when the field references another object.
    #[serde(default)]
    pub tag: String,
}

impl SchemaField {
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !self.tag.is_empty()
    }
}

/// An object of schema `board`. Only the identity is read client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(pub Value);

impl Board {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }
}

// =============================================================================
// NODE MANAGER
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub pub_key: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default, deserialize_with = "port_string")]
    pub port: String,
}

/// One side of a peering between two nodes. Used for both subscriptions
/// and subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub ip: String,
    #[serde(default, deserialize_with = "port_string")]
    pub port: String,
    #[serde(default)]
    pub pub_key: String,
}

/// Body of `POST manager/nodes/{id}/subscriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    /// `host:port` of the node to subscribe to.
    pub ip: String,
    /// Empty accepts whatever key the remote node announces.
    pub pub_key: String,
}

/// Status envelope returned by the node manager's mutating calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Text(String),
    Number(u64),
}

/// Ports arrive as JSON numbers from the node manager but are displayed
/// and compared as text.
fn port_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match PortRepr::deserialize(deserializer)? {
        PortRepr::Text(text) => text,
        PortRepr::Number(number) => number.to_string(),
    })
}
