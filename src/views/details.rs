//! Schema details: a single object rendered field by field.

use serde_json::Value;

use super::{ViewState, display_value};
use crate::net::types::{Schema, SchemaField};
use crate::services::Services;

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDetailsView {
    pub name: String,
    pub id: String,
    pub schema: ViewState<Schema>,
    pub item: ViewState<Value>,
}

impl SchemaDetailsView {
    /// The object is only requested once its schema has loaded.
    pub async fn load(services: &Services, name: &str, id: &str) -> Self {
        let schema = ViewState::from_result(services.objects.get_schema(name).await, "schema");
        let item = match schema {
            ViewState::Ready(_) => ViewState::from_result(services.objects.get_object(name, id).await, "object"),
            _ => ViewState::Failed("schema unavailable".to_owned()),
        };
        Self { name: name.to_owned(), id: id.to_owned(), schema, item }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{} / {}\n", self.name, self.id);
        let Some(schema) = self.schema.ready() else {
            out.push_str(&self.schema.render_with(|_| String::new()));
            return out;
        };

        out.push_str(&self.item.render_with(|item| {
            schema
                .fields
                .iter()
                .map(|field| {
                    let line = display_field(Some(field), Some(item));
                    if is_link(Some(field)) {
                        match get_link_id(field, item) {
                            Some(target) => format!("  {line} -> {}/{target}\n", field.tag),
                            None => format!("  {line} [{}]\n", field.tag),
                        }
                    } else {
                        format!("  {line}\n")
                    }
                })
                .collect()
        }));
        out
    }
}

/// Whether `field` references another object.
#[must_use]
pub fn is_link(field: Option<&SchemaField>) -> bool {
    field.is_some_and(SchemaField::is_reference)
}

/// Target of a reference field. Link targets are not resolvable from the
/// object payload yet, so this never yields one.
#[must_use]
pub fn get_link_id(_field: &SchemaField, _item: &Value) -> Option<String> {
    None
}

/// `name:value` for a field of `item`, or empty when either is absent.
#[must_use]
pub fn display_field(field: Option<&SchemaField>, item: Option<&Value>) -> String {
    match (field, item) {
        (Some(field), Some(item)) if !item.is_null() => {
            format!("{}:{}", field.name, display_value(item.get(&field.name)))
        }
        _ => String::new(),
    }
}
