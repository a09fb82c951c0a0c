//! Text views, one per route.
//!
//! DESIGN
//! ======
//! Each view loads its data from [`Services`] on activation and renders it
//! to a string. Every piece of loaded data sits in a [`ViewState`], so a
//! failed request shows up inline instead of leaving the view blank.
//! Nothing is retried and nothing is cached between activations.

pub mod boards;
pub mod collection;
pub mod dashboard;
pub mod detail;
pub mod details;
pub mod not_found;
pub mod schema;
pub mod subscription;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use serde_json::Value;

use crate::error::ApiError;
use crate::router::Route;
use crate::services::Services;

// =============================================================================
// VIEW STATE
// =============================================================================

/// Loading/ready/failed state of one piece of view data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    /// Convert a service result, logging failures under `what`.
    pub fn from_result(result: Result<T, ApiError>, what: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "failed to load {what}");
                Self::Failed(e.to_string())
            }
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Render ready data with `f`, or a placeholder line otherwise.
    pub fn render_with(&self, f: impl FnOnce(&T) -> String) -> String {
        match self {
            Self::Loading => "  loading...\n".to_owned(),
            Self::Ready(value) => f(value),
            Self::Failed(message) => format!("  error: {message}\n"),
        }
    }
}

/// Render a JSON value the way string concatenation would: strings bare,
/// absent values as `undefined`.
#[must_use]
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_owned(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// A loaded view for any route.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Dashboard(dashboard::DashboardView),
    Collection(collection::CollectionView),
    Boards(boards::BoardsView),
    Subscription(subscription::SubscriptionView),
    Schema(schema::SchemaView),
    SchemaDetails(details::SchemaDetailsView),
    Detail(detail::DetailView),
    NotFound(not_found::NotFoundView),
}

impl Page {
    /// Activate the view for `route`, issuing its requests.
    pub async fn load(route: Route, services: &Services) -> Self {
        tracing::debug!(?route, "activating view");
        match route {
            Route::Dashboard => Self::Dashboard(dashboard::DashboardView::load(services).await),
            Route::Collection => Self::Collection(collection::CollectionView::load(services).await),
            Route::Boards => Self::Boards(boards::BoardsView::load(services).await),
            Route::Subscription { node } => {
                Self::Subscription(subscription::SubscriptionView::load(services, node.as_deref()).await)
            }
            Route::Schema { name } => Self::Schema(schema::SchemaView::load(services, &name).await),
            Route::SchemaDetails { name, id } => {
                Self::SchemaDetails(details::SchemaDetailsView::load(services, &name, &id).await)
            }
            Route::Detail { rest } => Self::Detail(detail::DetailView::new(rest)),
            Route::NotFound { path } => Self::NotFound(not_found::NotFoundView::new(path)),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Dashboard(view) => view.render(),
            Self::Collection(view) => view.render(),
            Self::Boards(view) => view.render(),
            Self::Subscription(view) => view.render(),
            Self::Schema(view) => view.render(),
            Self::SchemaDetails(view) => view.render(),
            Self::Detail(view) => view.render(),
            Self::NotFound(view) => view.render(),
        }
    }
}
