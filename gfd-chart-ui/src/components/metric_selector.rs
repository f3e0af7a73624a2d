//! Dropdown selector for choosing a metric.

use crate::state::AppState;
use dioxus::prelude::*;

/// Metric dropdown selector.
/// Reads the metric option list from AppState and updates selected_metric
/// on change.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let metrics = state.metrics.read().clone();
    let selected = (state.selected_metric)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_metric.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select a Metric: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for metric in metrics.iter() {
                    option {
                        value: "{metric}",
                        selected: *metric == selected,
                        "{metric}"
                    }
                }
            }
        }
    }
}
