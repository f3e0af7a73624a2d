//! Global Financial Dashboard
//!
//! Single-page dashboard exploring global exchange rates and other financial
//! metrics: an animated GDP-growth vs. inflation scatter, a per-metric line
//! chart, and an exchange-rate choropleth, each driven by a dropdown.
//!
//! Data flow:
//! 1. `build.rs` copies the pre-cleaned fixture CSVs into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: load the CSVs into the in-memory SQLite provider, bundle it
//!    into an immutable `Dashboard`, and render the scatter timeline once.
//! 4. On dropdown change: rebuild the affected figure and re-render via
//!    the Plotly.js bridge. A bad selection renders a placeholder chart,
//!    never a crash.

use gfd_chart_ui::components::{
    ChartContainer, ChartHeader, DateSelector, ErrorDisplay, LoadingSpinner, MetricSelector,
};
use gfd_chart_ui::js_bridge;
use gfd_chart_ui::state::AppState;
use gfd_core::error::ChartError;
use gfd_db::Database;
use gfd_figure::{Dashboard, Figure};
use dioxus::prelude::*;

/// World Bank panel data (country, series, one column per year).
const PANEL_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/panel.csv"));
/// IMF exchange rates (one row per date, one column per currency).
const EXCHANGE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/exchange_rates.csv"));
/// Country display name to ISO-3 code and currency column.
const CODES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/country_codes.csv"));

/// Chart container DOM element IDs used by Plotly.js to render into.
const TIMELINE_CHART_ID: &str = "timeline-chart";
const METRIC_LINES_CHART_ID: &str = "metric-lines-chart";
const CHOROPLETH_CHART_ID: &str = "choropleth-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

/// Build one chart and hand it to the Plotly bridge.
///
/// A handler error is mapped to a visible "no data" placeholder figure; a
/// single bad selection must never take the page down.
fn render_chart(container_id: &str, result: Result<Figure, ChartError>) {
    let figure = match result {
        Ok(figure) => figure,
        Err(e) => {
            log::warn!("{container_id}: {e}");
            Figure::placeholder("No data for this selection")
        }
    };
    match figure.to_json() {
        Ok(json) => js_bridge::render_figure(container_id, &json),
        Err(e) => log::error!("{container_id}: figure serialization failed: {e}"),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load CSVs into the provider once on mount ───
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_panel(PANEL_CSV) {
                    log::error!("Failed to load panel data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load panel data: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if let Err(e) = db.load_exchange_rates(EXCHANGE_CSV) {
                    log::error!("Failed to load exchange rates: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load exchange rates: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if let Err(e) = db.load_country_codes(CODES_CSV) {
                    log::error!("Failed to load country codes: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load country codes: {}", e)));
                    state.loading.set(false);
                    return;
                }

                let dashboard = Dashboard::new(db);

                // Populate dropdown options and defaults
                state.metrics.set(
                    Dashboard::metric_options()
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                );
                match dashboard.date_options() {
                    Ok(dates) => {
                        if let Some(first) = dates.first() {
                            state.selected_date.set(first.clone());
                        }
                        state.dates.set(dates);
                    }
                    Err(e) => {
                        log::error!("Failed to read date index: {}", e);
                        state
                            .error_msg
                            .set(Some(format!("Failed to read date index: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }

                state.dashboard.set(Some(dashboard));
                state.loading.set(false);

                // Inject the Plotly.js bundle (one-time)
                js_bridge::init_charts();
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Render the animated scatter once data is in ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(dashboard) = state.dashboard.read().clone() else {
            return;
        };
        render_chart(TIMELINE_CHART_ID, dashboard.scatter_timeline());
    });

    // ─── Effect 3: Re-render the line chart on metric change ───
    use_effect(move || {
        let metric = (state.selected_metric)();
        if (state.loading)() || metric.is_empty() {
            return;
        }
        let Some(dashboard) = state.dashboard.read().clone() else {
            return;
        };
        render_chart(METRIC_LINES_CHART_ID, dashboard.line_chart(&metric));
    });

    // ─── Effect 4: Re-render the choropleth on date change ───
    use_effect(move || {
        let date = (state.selected_date)();
        if (state.loading)() || date.is_empty() {
            return;
        }
        let Some(dashboard) = state.dashboard.read().clone() else {
            return;
        };
        render_chart(CHOROPLETH_CHART_ID, dashboard.choropleth(&date));
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { "Global Financial Dashboard" }
            p {
                style: "font-size: 14px; color: #666; margin-top: 0;",
                "Exploring global exchange rates and other financial metrics. \
                 Data comes from two sources: the International Monetary Fund (IMF) \
                 and the World Bank."
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    hint: "The datasets are embedded in the page; reloading retries the load.".to_string(),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "GDP Growth vs. Inflation Rate 1995-2018".to_string(),
                    subtitle: "Press Play or drag the slider to step through the years".to_string(),
                }
                ChartContainer {
                    id: TIMELINE_CHART_ID.to_string(),
                    min_height: 450,
                    source: "Source: World Bank national accounts data".to_string(),
                }

                ChartHeader {
                    title: "Key Metrics 1995-2018".to_string(),
                }
                MetricSelector {}
                ChartContainer {
                    id: METRIC_LINES_CHART_ID.to_string(),
                    min_height: 400,
                    source: "Source: World Bank national accounts data".to_string(),
                }

                ChartHeader {
                    title: "Exchange Rate Choropleth".to_string(),
                    subtitle: "Rates are relative to the US dollar".to_string(),
                }
                DateSelector {}
                ChartContainer {
                    id: CHOROPLETH_CHART_ID.to_string(),
                    min_height: 450,
                    source: "Source: IMF exchange rate archive".to_string(),
                }
            }
        }
    }
}
