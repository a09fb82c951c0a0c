//! Collection: every schema the store knows about.

use super::ViewState;
use crate::net::types::Schema;
use crate::services::Services;

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView {
    pub schemas: ViewState<Vec<Schema>>,
}

impl CollectionView {
    pub async fn load(services: &Services) -> Self {
        let schemas = ViewState::from_result(services.objects.get_schema_list().await, "schema list");
        Self { schemas }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let body = self.schemas.render_with(|schemas| {
            if schemas.is_empty() {
                return "  (no schemas)\n".to_owned();
            }
            schemas
                .iter()
                .map(|schema| format!("  {} ({} fields) -> /schema/{}\n", schema.name, schema.fields.len(), schema.name))
                .collect()
        });
        format!("Collection\n{body}")
    }
}
