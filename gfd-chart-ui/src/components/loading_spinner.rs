//! Startup indicator shown while the embedded CSVs are loaded into SQLite.

use dioxus::prelude::*;

/// Centered notice covering the page until the data provider is ready.
///
/// The fixture load is synchronous and fast, so this is a single static
/// frame rather than an animated spinner.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 48px 0; color: #555;",
            div {
                style: "font-size: 15px;",
                "Loading IMF and World Bank datasets..."
            }
            div {
                style: "margin-top: 4px; font-size: 12px; color: #888;",
                "Building the in-memory database"
            }
        }
    }
}
