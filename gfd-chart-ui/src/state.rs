//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use gfd_figure::Dashboard;

/// Shared application state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dashboard bundle (None until the CSVs are in)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected metric (line chart dropdown)
    pub selected_metric: Signal<String>,
    /// Currently selected date label (choropleth dropdown)
    pub selected_date: Signal<String>,
    /// Metric dropdown options
    pub metrics: Signal<Vec<String>>,
    /// Date dropdown options, in the exchange table's natural order
    pub dates: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_metric: Signal::new("Population growth (annual %)".to_string()),
            selected_date: Signal::new(String::new()),
            metrics: Signal::new(Vec::new()),
            dates: Signal::new(Vec::new()),
        }
    }
}
