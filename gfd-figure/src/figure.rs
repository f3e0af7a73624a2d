//! Typed, serializable figure descriptions.
//!
//! A [`Figure`] is the declarative chart specification the rendering layer
//! consumes: `data` (traces), `layout` (axes, slider and menu chrome), and
//! `frames` (named animation snapshots of `data`). Everything serializes to
//! Plotly-compatible JSON via serde; nothing here touches the DOM.
//!
//! Traces are a tagged variant ([`Trace`]) rather than loose nested maps, so
//! handler outputs are statically checkable. Builders construct a fresh
//! figure on every call; there is no incremental mutation or shared cache.

use serde::Serialize;

/// A complete declarative chart: traces, layout, and animation frames.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    /// A static figure with no animation frames.
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
        }
    }

    /// A visible "no data" chart shown instead of crashing the page when a
    /// selection cannot be charted.
    pub fn placeholder(message: &str) -> Self {
        let layout = Layout {
            annotations: vec![Annotation::centered(message)],
            xaxis: Some(Axis::hidden()),
            yaxis: Some(Axis::hidden()),
            ..Layout::default()
        };
        Self::new(Vec::new(), layout)
    }

    /// Serialize the whole figure to a Plotly JSON string.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One named animation snapshot of trace data.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

// ───────────────────── Traces ─────────────────────

/// A chart trace: the tagged variant the three builders emit.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Trace {
    Scatter(ScatterTrace),
    Line(LineTrace),
    Choropleth(ChoroplethTrace),
}

/// A markers-mode scatter trace (one per country in the timeline).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub text: String,
    pub name: String,
    pub marker: Marker,
}

impl ScatterTrace {
    pub fn markers(name: &str, x: Vec<f64>, y: Vec<f64>, marker: Marker) -> Self {
        Self {
            kind: "scatter",
            x,
            y,
            mode: "markers",
            text: name.to_string(),
            name: name.to_string(),
            marker,
        }
    }
}

/// A continuous-line trace (one per country in the line chart).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub name: String,
}

impl LineTrace {
    pub fn lines(name: &str, x: Vec<i32>, y: Vec<f64>) -> Self {
        Self {
            kind: "scatter",
            x,
            y,
            mode: "lines",
            name: name.to_string(),
        }
    }
}

/// A single choropleth layer colored by exchange rate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub colorscale: &'static str,
    pub autocolorscale: bool,
    pub reversescale: bool,
    pub marker: ChoroplethMarker,
    pub colorbar: ColorBar,
}

impl ChoroplethTrace {
    /// The dashboard's fixed map styling: single-hue Greens, reversed,
    /// white region outlines.
    pub fn exchange_rates(locations: Vec<String>, z: Vec<f64>) -> Self {
        Self {
            kind: "choropleth",
            locations,
            z,
            colorscale: "Greens",
            autocolorscale: false,
            reversescale: true,
            marker: ChoroplethMarker {
                line: MarkerLine {
                    color: "white",
                    width: 0.5,
                },
            },
            colorbar: ColorBar {
                title: "Exchange Rate".to_string(),
            },
        }
    }
}

/// Marker styling for scatter points.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Marker {
    pub sizemode: &'static str,
    pub sizeref: f64,
    pub size: f64,
    pub opacity: f64,
}

/// Region outline styling for the choropleth.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethMarker {
    pub line: MarkerLine,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerLine {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorBar {
    pub title: String,
}

// ───────────────────── Layout ─────────────────────

/// Chart layout: axes, title, margins, and the animation chrome.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn ranged(title: &str, range: [f64; 2]) -> Self {
        Self {
            range: Some(range),
            title: Some(title.to_string()),
            visible: None,
        }
    }

    fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub b: u32,
    pub t: u32,
    pub r: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub orientation: &'static str,
}

/// A free-floating text annotation in paper coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub font: Font,
}

impl Annotation {
    pub fn centered(text: &str) -> Self {
        Self {
            text: text.to_string(),
            showarrow: false,
            xref: "paper",
            yref: "paper",
            x: 0.5,
            y: 0.5,
            font: Font { size: 18 },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Pad {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

// ───────────────────── Animation chrome ─────────────────────

/// Frame/transition options passed to Plotly's animate command.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct AnimationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fromcurrent: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameOptions {
    pub duration: u32,
    pub redraw: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transition {
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<&'static str>,
}

/// The year slider.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slider {
    pub active: u32,
    pub yanchor: &'static str,
    pub xanchor: &'static str,
    pub currentvalue: CurrentValue,
    pub transition: Transition,
    pub pad: Pad,
    pub len: f64,
    pub x: f64,
    pub y: f64,
    pub steps: Vec<SliderStep>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentValue {
    pub font: Font,
    pub prefix: &'static str,
    pub visible: bool,
    pub xanchor: &'static str,
}

/// One slider step: "jump to the frame named after this year".
///
/// `args` serializes as Plotly's `[[frame_name], options]` pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderStep {
    pub args: (Vec<String>, AnimationOptions),
    pub label: String,
    pub method: &'static str,
}

/// The Play/Pause button strip.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateMenu {
    pub buttons: Vec<Button>,
    pub direction: &'static str,
    pub pad: Pad,
    pub showactive: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
}

/// One animate button.
///
/// Plotly distinguishes Play (`[null, options]`, resume all frames) from
/// Pause (`[[null], options]`, animate to nowhere immediately) purely by the
/// shape of the first argument, which the `Option<Vec<Option<String>>>`
/// encodes exactly.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Button {
    pub args: (Option<Vec<Option<String>>>, AnimationOptions),
    pub label: &'static str,
    pub method: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn scatter_trace_serializes_with_plotly_tags() {
        let trace = Trace::Scatter(ScatterTrace::markers(
            "China",
            vec![16.8],
            vec![10.9],
            Marker {
                sizemode: "area",
                sizeref: 200000.0,
                size: 17.0,
                opacity: 0.65,
            },
        ));
        let v: Value = serde_json::to_value(&trace).unwrap();
        assert_eq!(v["type"], "scatter");
        assert_eq!(v["mode"], "markers");
        assert_eq!(v["marker"]["size"], 17.0);
        assert_eq!(v["text"], "China");
    }

    #[test]
    fn line_trace_is_scatter_type_with_lines_mode() {
        let trace = Trace::Line(LineTrace::lines("Japan", vec![1997, 1998], vec![1.1, -1.1]));
        let v: Value = serde_json::to_value(&trace).unwrap();
        assert_eq!(v["type"], "scatter");
        assert_eq!(v["mode"], "lines");
        assert_eq!(v["x"], serde_json::json!([1997, 1998]));
    }

    #[test]
    fn choropleth_trace_has_reversed_greens_scale() {
        let trace = ChoroplethTrace::exchange_rates(vec!["JPN".to_string()], vec![112.3]);
        let v: Value = serde_json::to_value(&trace).unwrap();
        assert_eq!(v["type"], "choropleth");
        assert_eq!(v["colorscale"], "Greens");
        assert_eq!(v["reversescale"], true);
        assert_eq!(v["autocolorscale"], false);
        assert_eq!(v["marker"]["line"]["color"], "white");
        assert_eq!(v["colorbar"]["title"], "Exchange Rate");
    }

    #[test]
    fn play_and_pause_args_take_plotly_shapes() {
        let play = Button {
            args: (
                None,
                AnimationOptions {
                    frame: Some(FrameOptions {
                        duration: 700,
                        redraw: false,
                    }),
                    fromcurrent: Some(true),
                    ..AnimationOptions::default()
                },
            ),
            label: "Play",
            method: "animate",
        };
        let pause = Button {
            args: (
                Some(vec![None]),
                AnimationOptions {
                    frame: Some(FrameOptions {
                        duration: 0,
                        redraw: false,
                    }),
                    mode: Some("immediate"),
                    transition: Some(Transition {
                        duration: 0,
                        easing: None,
                    }),
                    ..AnimationOptions::default()
                },
            ),
            label: "Pause",
            method: "animate",
        };
        let play_v: Value = serde_json::to_value(&play).unwrap();
        let pause_v: Value = serde_json::to_value(&pause).unwrap();
        assert_eq!(play_v["args"][0], Value::Null);
        assert_eq!(pause_v["args"][0], serde_json::json!([null]));
        assert_eq!(pause_v["args"][1]["mode"], "immediate");
    }

    #[test]
    fn empty_layout_serializes_to_empty_object() {
        let v: Value = serde_json::to_value(Layout::default()).unwrap();
        assert_eq!(v, serde_json::json!({}));
    }

    #[test]
    fn placeholder_shows_message_and_hides_axes() {
        let fig = Figure::placeholder("No data for this selection");
        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.annotations.len(), 1);
        assert_eq!(fig.layout.annotations[0].text, "No data for this selection");
        let v: Value = serde_json::to_value(&fig).unwrap();
        assert_eq!(v["layout"]["xaxis"]["visible"], false);
        assert!(v.get("frames").is_none(), "no frames key when empty");
    }
}
