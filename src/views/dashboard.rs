//! Dashboard: object count and memory usage of the store.

use super::ViewState;
use crate::net::types::Statistic;
use crate::services::Services;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

const KB: f64 = 1024.0;
const MB: f64 = 1_048_576.0;
const GB: f64 = 1_073_741_824.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stat: ViewState<Statistic>,
}

impl DashboardView {
    pub async fn load(services: &Services) -> Self {
        let stat = ViewState::from_result(services.objects.get_statistic().await, "statistic");
        Self { stat }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let body = self.stat.render_with(|stat| {
            #[allow(clippy::cast_precision_loss)]
            let memory = format_size_units(stat.memory as f64);
            format!("  objects: {}\n  memory:  {memory}\n", stat.total)
        });
        format!("Dashboard\n{body}")
    }
}

/// Human-readable byte count with two decimals above 1 KB.
///
/// Zero, negative and NaN inputs all read `0 byte`.
#[must_use]
pub fn format_size_units(bytes: f64) -> String {
    if bytes >= GB {
        format!("{:.2} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes / KB)
    } else if bytes > 1.0 {
        format!("{bytes} bytes")
    } else if (bytes - 1.0).abs() < f64::EPSILON {
        "1 byte".to_owned()
    } else {
        "0 byte".to_owned()
    }
}
