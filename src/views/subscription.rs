//! Subscription: nodes of the local manager and the peerings of one node.

use super::ViewState;
use crate::error::ApiError;
use crate::net::types::{JsonResponse, Node, Subscription};
use crate::services::Services;

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionView {
    pub nodes: ViewState<Vec<Node>>,
    pub selected: Option<Node>,
    /// `None` while no node is selected.
    pub subscriptions: Option<ViewState<Vec<Subscription>>>,
    pub subscribers: Option<ViewState<Vec<Subscription>>>,
}

impl SubscriptionView {
    /// Load the node list, then peerings of `node` (or the first node).
    pub async fn load(services: &Services, node: Option<&str>) -> Self {
        let nodes = ViewState::from_result(services.nodes.get_nodes().await, "nodes");

        let selected = nodes.ready().and_then(|list| match node {
            Some(key) => list.iter().find(|n| n.pub_key == key).cloned(),
            None => list.first().cloned(),
        });

        let Some(current) = selected.clone() else {
            if let (ViewState::Ready(_), Some(key)) = (&nodes, node) {
                tracing::info!(node = %key, "requested node not found");
            }
            return Self { nodes, selected, subscriptions: None, subscribers: None };
        };

        let (subscriptions, subscribers) = tokio::join!(
            services.nodes.get_subscriptions(&current.pub_key),
            services.nodes.get_subscribers(&current.pub_key),
        );

        Self {
            subscriptions: Some(ViewState::from_result(subscriptions, "subscriptions")),
            subscribers: Some(ViewState::from_result(subscribers, "subscribers")),
            nodes,
            selected,
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Nodes\n");
        out.push_str(&self.nodes.render_with(|nodes| {
            if nodes.is_empty() {
                return "  (no nodes)\n".to_owned();
            }
            nodes
                .iter()
                .map(|node| {
                    let marker = if self.selected.as_ref() == Some(node) { '*' } else { ' ' };
                    format!(" {marker}{}\n", peer_line(&node.pub_key, &node.ip, &node.port))
                })
                .collect()
        }));

        out.push_str("Subscriptions\n");
        out.push_str(&render_peer_state(self.subscriptions.as_ref()));
        out.push_str("Subscribers\n");
        out.push_str(&render_peer_state(self.subscribers.as_ref()));
        out
    }
}

fn peer_line(pub_key: &str, ip: &str, port: &str) -> String {
    format!("{pub_key} {ip}:{port}")
}

fn render_peer_state(state: Option<&ViewState<Vec<Subscription>>>) -> String {
    match state {
        Some(state) => state.render_with(|list| render_peers(list)),
        None => "  (no node selected)\n".to_owned(),
    }
}

fn render_peers(list: &[Subscription]) -> String {
    if list.is_empty() {
        return "  (none)\n".to_owned();
    }
    list.iter()
        .map(|peer| format!("  {}\n", peer_line(&peer.pub_key, &peer.ip, &peer.port)))
        .collect()
}

/// Inline message for a node creation attempt. Rejections show the
/// server's `detail`.
#[must_use]
pub fn create_node_message(result: &Result<JsonResponse, ApiError>) -> String {
    match result {
        Ok(response) if response.detail.is_empty() => "node created".to_owned(),
        Ok(response) => response.detail.clone(),
        Err(ApiError::Rejected { detail, .. }) => format!("error: {detail}"),
        Err(e) => format!("error: {e}"),
    }
}
