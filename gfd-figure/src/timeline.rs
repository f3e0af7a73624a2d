//! The animated scatter timeline: GDP growth vs. inflation, one frame per
//! year after the base year.

use crate::figure::{
    AnimationOptions, Axis, Button, CurrentValue, Figure, Font, Frame, FrameOptions, Layout,
    Marker, Pad, ScatterTrace, Slider, SliderStep, Trace, Transition, UpdateMenu,
};
use crate::{data_err, Dashboard};
use gfd_core::error::ChartError;
use gfd_core::Metric;

// Fixed axis ranges; out-of-range values are clipped by the renderer,
// never filtered here.
const X_RANGE: [f64; 2] = [-20.0, 100.0];
const Y_RANGE: [f64; 2] = [-20.0, 25.0];

const MARKER: Marker = Marker {
    sizemode: "area",
    sizeref: 200000.0,
    size: 17.0,
    opacity: 0.65,
};

// Animation timings (milliseconds).
const PLAY_FRAME_MS: u32 = 700;
const PLAY_TRANSITION_MS: u32 = 600;
const STEP_FRAME_MS: u32 = 600;
const STEP_TRANSITION_MS: u32 = 300;
const SLIDER_TRANSITION_MS: u32 = 450;

impl Dashboard {
    /// Build the animated scatter figure.
    ///
    /// Initial `data` holds one marker per country at the base year
    /// (x = inflation, y = GDP growth). `frames` holds the same layout
    /// recomputed for every panel year strictly after the base year, in
    /// ascending order, each named with the literal year. The slider gets
    /// one step per frame.
    ///
    /// A country missing either metric for a year is omitted from that
    /// year's markers and the gap is logged; see [`Dashboard::year_markers`].
    pub fn scatter_timeline(&self) -> Result<Figure, ChartError> {
        let years = self.db().query_panel_years().map_err(data_err)?;

        let data = self.year_markers(self.base_year)?;

        let mut frames = Vec::new();
        let mut steps = Vec::new();
        for year in years.into_iter().filter(|y| *y > self.base_year) {
            let label = year.to_string();
            frames.push(Frame {
                name: label.clone(),
                data: self.year_markers(year)?,
            });
            steps.push(SliderStep {
                args: (
                    vec![label.clone()],
                    AnimationOptions {
                        frame: Some(FrameOptions {
                            duration: STEP_FRAME_MS,
                            redraw: false,
                        }),
                        mode: Some("immediate"),
                        transition: Some(Transition {
                            duration: STEP_TRANSITION_MS,
                            easing: None,
                        }),
                        fromcurrent: None,
                    },
                ),
                label,
                method: "animate",
            });
        }

        let layout = Layout {
            xaxis: Some(Axis::ranged("Inflation Rate", X_RANGE)),
            yaxis: Some(Axis::ranged("GDP Growth Rate", Y_RANGE)),
            hovermode: Some("closest"),
            sliders: vec![year_slider(steps)],
            updatemenus: vec![play_pause_menu()],
            ..Layout::default()
        };

        Ok(Figure {
            data,
            layout,
            frames,
        })
    }

    /// One marker trace per country for a single year.
    ///
    /// Missing-value policy: a country whose inflation or GDP-growth value
    /// is absent for this year is omitted (with a warning) rather than
    /// plotted at zero. The provider itself reports the absence as
    /// `KeyMissing`; any other provider failure propagates.
    fn year_markers(&self, year: i32) -> Result<Vec<Trace>, ChartError> {
        let mut traces = Vec::with_capacity(self.countries.len());
        for country in &self.countries {
            let x = match self.db().panel_value(year, country, Metric::Inflation.as_str()) {
                Ok(v) => v,
                Err(ChartError::KeyMissing { .. }) => {
                    log::warn!("timeline: omitting {country} for {year}: no inflation value");
                    continue;
                }
                Err(e) => return Err(e),
            };
            let y = match self.db().panel_value(year, country, Metric::GdpGrowth.as_str()) {
                Ok(v) => v,
                Err(ChartError::KeyMissing { .. }) => {
                    log::warn!("timeline: omitting {country} for {year}: no GDP growth value");
                    continue;
                }
                Err(e) => return Err(e),
            };
            traces.push(Trace::Scatter(ScatterTrace::markers(
                country,
                vec![x],
                vec![y],
                MARKER,
            )));
        }
        Ok(traces)
    }
}

fn year_slider(steps: Vec<SliderStep>) -> Slider {
    Slider {
        active: 0,
        yanchor: "top",
        xanchor: "left",
        currentvalue: CurrentValue {
            font: Font { size: 20 },
            prefix: "Year:",
            visible: true,
            xanchor: "right",
        },
        transition: Transition {
            duration: SLIDER_TRANSITION_MS,
            easing: Some("cubic-in-out"),
        },
        pad: Pad {
            b: Some(10),
            t: Some(50),
            r: None,
        },
        len: 0.9,
        x: 0.1,
        y: 0.0,
        steps,
    }
}

fn play_pause_menu() -> UpdateMenu {
    UpdateMenu {
        buttons: vec![
            Button {
                args: (
                    None,
                    AnimationOptions {
                        frame: Some(FrameOptions {
                            duration: PLAY_FRAME_MS,
                            redraw: false,
                        }),
                        fromcurrent: Some(true),
                        transition: Some(Transition {
                            duration: PLAY_TRANSITION_MS,
                            easing: Some("quadratic-in-out"),
                        }),
                        mode: None,
                    },
                ),
                label: "Play",
                method: "animate",
            },
            Button {
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
                        fromcurrent: None,
                    },
                ),
                label: "Pause",
                method: "animate",
            },
        ],
        direction: "left",
        pad: Pad {
            r: Some(10),
            t: Some(87),
            b: None,
        },
        showactive: false,
        kind: "buttons",
        x: 0.1,
        xanchor: "right",
        y: 0.0,
        yanchor: "top",
    }
}
