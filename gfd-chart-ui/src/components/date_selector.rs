//! Dropdown selector for choosing an exchange-rate date.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date dropdown selector for the choropleth.
/// Options are the exchange table's literal date labels in index order.
#[component]
pub fn DateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let dates = state.dates.read().clone();
    let selected = (state.selected_date)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "date-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select a Date: "
            }
            select {
                id: "date-select",
                onchange: on_change,
                for date in dates.iter() {
                    option {
                        value: "{date}",
                        selected: *date == selected,
                        "{date}"
                    }
                }
            }
        }
    }
}
