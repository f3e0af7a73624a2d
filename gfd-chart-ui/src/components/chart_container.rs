//! Card that hosts one Plotly chart and its source attribution.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the Plotly bridge renders into. The bridge polls for this
    /// element, so the inner div must exist before `render_figure` fires.
    pub id: String,
    /// Minimum height reserved so the page does not reflow when Plotly
    /// replaces the placeholder text.
    #[props(default = 400)]
    pub min_height: u32,
    /// Data source line shown under the chart, e.g. "Source: IMF".
    #[props(default = String::new())]
    pub source: String,
}

/// Reserved space for a chart plus an optional source caption.
///
/// The "Preparing chart..." text sits behind the plot area; Plotly's render
/// covers it, so no explicit loading flag is needed here.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let frame = format!(
        "min-height: {}px; position: relative; width: 100%; border: 1px solid #E0E0E0; border-radius: 4px; margin-bottom: 4px;",
        props.min_height
    );

    rsx! {
        div {
            div {
                style: "{frame}",
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #999; font-size: 13px;",
                    "Preparing chart..."
                }
                div {
                    id: "{props.id}",
                    style: "position: relative; width: 100%;",
                }
            }
            if !props.source.is_empty() {
                div {
                    style: "font-size: 11px; color: #888; margin-bottom: 16px;",
                    "{props.source}"
                }
            }
        }
    }
}
