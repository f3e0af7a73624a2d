//! The metric line chart: one line per country for a selected metric.

use crate::figure::{Axis, Figure, Layout, Legend, LineTrace, Margin, Trace};
use crate::{data_err, Dashboard};
use gfd_core::error::ChartError;
use gfd_core::{Metric, LEADING_YEAR_OFFSET};

impl Dashboard {
    /// Build the line chart for a metric selected in the dropdown.
    ///
    /// `metric` must be one of the enumerated series names; anything else
    /// fails with [`ChartError::InvalidMetric`] before any chart work.
    ///
    /// Traces start two positions after the table's first recorded year
    /// (the leading columns of the source panel are known-bad). Years a
    /// country has no value for are omitted pairwise, so every trace has
    /// equal-length x and y.
    pub fn line_chart(&self, metric: &str) -> Result<Figure, ChartError> {
        let metric = Metric::from_name(metric)?;

        let years = self.db().query_panel_years().map_err(data_err)?;
        let start_year = match years.get(LEADING_YEAR_OFFSET) {
            Some(y) => *y,
            None => {
                log::warn!(
                    "line chart: only {} panel years loaded, nothing to plot",
                    years.len()
                );
                i32::MAX
            }
        };

        let mut data = Vec::with_capacity(self.countries.len());
        for country in &self.countries {
            let series = self
                .db()
                .query_metric_series(country, metric.as_str())
                .map_err(data_err)?;

            let mut x = Vec::with_capacity(series.len());
            let mut y = Vec::with_capacity(series.len());
            for point in series.into_iter().filter(|p| p.year >= start_year) {
                x.push(point.year);
                y.push(point.value);
            }
            data.push(Trace::Line(LineTrace::lines(country, x, y)));
        }

        let layout = Layout {
            xaxis: Some(Axis::titled("Time")),
            yaxis: Some(Axis::titled(metric.as_str())),
            margin: Some(Margin {
                l: 40,
                b: 40,
                t: 10,
                r: 10,
            }),
            legend: Some(Legend {
                x: 0.0,
                y: 1.0,
                orientation: "h",
            }),
            hovermode: Some("closest"),
            ..Layout::default()
        };

        Ok(Figure::new(data, layout))
    }
}
