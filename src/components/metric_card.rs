use dioxus::prelude::*;

use crate::utils::format::format_metric;

/// Read-only counter card. A metric the API did not report renders as an
/// empty value, not as zero.
#[allow(non_snake_case)]
#[component]
pub fn MetricCard(label: String, value: Option<i64>) -> Element {
    rsx! {
        div { class: "metric-card",
            h4 { class: "metric-label", "{label}" }
            p { class: "metric-value tabular-nums", "{format_metric(value)}" }
        }
    }
}
