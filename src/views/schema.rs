//! Schema view: one schema and every object stored under it.

use serde_json::Value;

use super::{ViewState, display_value};
use crate::net::types::Schema;
use crate::services::Services;

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaView {
    pub name: String,
    pub schema: ViewState<Schema>,
    pub items: ViewState<Vec<Value>>,
}

impl SchemaView {
    /// Schema and object list are independent, so both requests run at once.
    pub async fn load(services: &Services, name: &str) -> Self {
        let (schema, items) = tokio::join!(
            services.objects.get_schema(name),
            services.objects.get_object_list(name),
        );
        Self {
            name: name.to_owned(),
            schema: ViewState::from_result(schema, "schema"),
            items: ViewState::from_result(items, "object list"),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("Schema: {}\n", self.name);
        out.push_str(&self.schema.render_with(|schema| {
            let fields: Vec<String> = schema
                .fields
                .iter()
                .map(|field| {
                    if field.is_reference() { format!("{} -> {}", field.name, field.tag) } else { field.name.clone() }
                })
                .collect();
            format!("  fields: {}\n", fields.join(", "))
        }));

        // Item lines need the field list, so they wait on the schema too.
        let empty = Schema::default();
        let schema = self.schema.ready().unwrap_or(&empty);
        out.push_str(&self.items.render_with(|items| {
            if items.is_empty() {
                return "  (no objects)\n".to_owned();
            }
            items
                .iter()
                .map(|item| {
                    let line = display_item(schema, item);
                    match item.get("id").and_then(Value::as_str) {
                        Some(id) => format!("  {} -> /schema/{}/{id}\n", line.trim_end(), self.name),
                        None => format!("  {}\n", line.trim_end()),
                    }
                })
                .collect()
        }));
        out
    }
}

/// One-line summary of `item`: tagged fields contribute their tag, literal
/// fields their value followed by `;  `.
#[must_use]
pub fn display_item(schema: &Schema, item: &Value) -> String {
    let mut result = String::new();
    for field in &schema.fields {
        if field.is_reference() {
            result.push_str(&field.tag);
            result.push(' ');
        } else {
            result.push_str(&display_value(item.get(&field.name)));
            result.push_str(";  ");
        }
    }
    result
}
