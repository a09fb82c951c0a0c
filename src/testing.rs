//! In-memory service fakes for view tests.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiError;
use crate::net::skyobject::ObjectStore;
use crate::net::skywire::NodeManager;
use crate::net::types::{JsonResponse, NewSubscription, Node, Schema, Statistic, Subscription};
use crate::services::Services;

pub fn services_with(store: FakeStore, nodes: FakeNodes) -> Services {
    Services::new(Arc::new(store), Arc::new(nodes))
}

/// Canned object store answers plus a log of the calls it received.
pub struct FakeStore {
    pub stat: Result<Statistic, ApiError>,
    pub schemas: Result<Vec<Schema>, ApiError>,
    pub schema: Result<Schema, ApiError>,
    pub objects: Result<Vec<Value>, ApiError>,
    pub object: Result<Value, ApiError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            stat: Ok(Statistic::default()),
            schemas: Ok(Vec::new()),
            schema: Ok(Schema::default()),
            objects: Ok(Vec::new()),
            object: Ok(Value::Null),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeStore {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl ObjectStore for FakeStore {
    async fn get_statistic(&self) -> Result<Statistic, ApiError> {
        self.record("get_statistic".into());
        self.stat.clone()
    }

    async fn get_schema_list(&self) -> Result<Vec<Schema>, ApiError> {
        self.record("get_schema_list".into());
        self.schemas.clone()
    }

    async fn get_schema(&self, name: &str) -> Result<Schema, ApiError> {
        self.record(format!("get_schema {name}"));
        self.schema.clone()
    }

    async fn get_object_list(&self, schema: &str) -> Result<Vec<Value>, ApiError> {
        self.record(format!("get_object_list {schema}"));
        self.objects.clone()
    }

    async fn get_object(&self, schema: &str, id: &str) -> Result<Value, ApiError> {
        self.record(format!("get_object {schema} {id}"));
        self.object.clone()
    }

    async fn sync_object(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("sync_object {id}"));
        Ok(())
    }

    async fn object_info(&self, id: &str) -> Result<Value, ApiError> {
        self.record(format!("object_info {id}"));
        self.object.clone()
    }

    async fn create(&self, schema: &str, name: &str) -> Result<Value, ApiError> {
        self.record(format!("create {schema} {name}"));
        self.object.clone()
    }
}

/// Canned node manager answers plus a log of the calls it received.
pub struct FakeNodes {
    pub nodes: Result<Vec<Node>, ApiError>,
    pub subscriptions: Result<Vec<Subscription>, ApiError>,
    pub subscribers: Result<Vec<Subscription>, ApiError>,
    pub created: Result<JsonResponse, ApiError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeNodes {
    fn default() -> Self {
        Self {
            nodes: Ok(Vec::new()),
            subscriptions: Ok(Vec::new()),
            subscribers: Ok(Vec::new()),
            created: Ok(JsonResponse::default()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeNodes {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn node(&self, node_id: &str) -> Result<Node, ApiError> {
        let nodes = self.nodes.clone()?;
        nodes
            .into_iter()
            .find(|node| node.pub_key == node_id)
            .ok_or_else(|| ApiError::Status { status: 404, body: "not found".into() })
    }
}

#[async_trait::async_trait]
impl NodeManager for FakeNodes {
    async fn manager_info(&self) -> Result<String, ApiError> {
        self.record("manager_info".into());
        Ok("Hello world!".into())
    }

    async fn get_nodes(&self) -> Result<Vec<Node>, ApiError> {
        self.record("get_nodes".into());
        self.nodes.clone()
    }

    async fn get_node(&self, node_id: &str) -> Result<Node, ApiError> {
        self.record(format!("get_node {node_id}"));
        self.node(node_id)
    }

    async fn get_subscriptions(&self, node_id: &str) -> Result<Vec<Subscription>, ApiError> {
        self.record(format!("get_subscriptions {node_id}"));
        self.subscriptions.clone()
    }

    async fn get_subscribers(&self, node_id: &str) -> Result<Vec<Subscription>, ApiError> {
        self.record(format!("get_subscribers {node_id}"));
        self.subscribers.clone()
    }

    async fn get_subscription(&self, node_id: &str, pub_key: &str) -> Result<Subscription, ApiError> {
        self.record(format!("get_subscription {node_id} {pub_key}"));
        find_subscription(self.subscriptions.clone()?, pub_key)
    }

    async fn get_subscriber(&self, node_id: &str, pub_key: &str) -> Result<Subscription, ApiError> {
        self.record(format!("get_subscriber {node_id} {pub_key}"));
        find_subscription(self.subscribers.clone()?, pub_key)
    }

    async fn create_node(&self, sec_key: &str) -> Result<JsonResponse, ApiError> {
        self.record(format!("create_node {sec_key}"));
        self.created.clone()
    }

    async fn terminate_node(&self, node_id: &str) -> Result<JsonResponse, ApiError> {
        self.record(format!("terminate_node {node_id}"));
        self.created.clone()
    }

    async fn add_subscription(&self, node_id: &str, subscription: &NewSubscription) -> Result<JsonResponse, ApiError> {
        self.record(format!("add_subscription {node_id} {}", subscription.ip));
        self.created.clone()
    }

    async fn terminate_subscription(&self, node_id: &str, pub_key: &str) -> Result<JsonResponse, ApiError> {
        self.record(format!("terminate_subscription {node_id} {pub_key}"));
        self.created.clone()
    }

    async fn terminate_subscriber(&self, node_id: &str, pub_key: &str) -> Result<JsonResponse, ApiError> {
        self.record(format!("terminate_subscriber {node_id} {pub_key}"));
        self.created.clone()
    }
}

fn find_subscription(items: Vec<Subscription>, pub_key: &str) -> Result<Subscription, ApiError> {
    items
        .into_iter()
        .find(|item| item.pub_key == pub_key)
        .ok_or_else(|| ApiError::Status { status: 404, body: "not found".into() })
}
