//! The enumerated metric set for the line chart and the scatter timeline.

use crate::error::ChartError;
use serde::Serialize;
use std::fmt;

/// One of the five World Bank series the dashboard plots.
///
/// Display names match the `Series Name` column of the panel CSV exactly;
/// dropdown option values round-trip through [`Metric::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    PopulationGrowth,
    GdpGrowth,
    Inflation,
    Exports,
    Imports,
}

impl Metric {
    /// All metrics, in dropdown order.
    pub const ALL: [Metric; 5] = [
        Metric::PopulationGrowth,
        Metric::GdpGrowth,
        Metric::Inflation,
        Metric::Exports,
        Metric::Imports,
    ];

    /// The literal series name as it appears in the panel table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::PopulationGrowth => "Population growth (annual %)",
            Metric::GdpGrowth => "GDP growth (annual %)",
            Metric::Inflation => "Inflation, consumer prices (annual %)",
            Metric::Exports => "Exports of goods and services (% of GDP)",
            Metric::Imports => "Imports of goods and services (% of GDP)",
        }
    }

    /// Parse a control value back into a metric.
    ///
    /// Any name outside the enumerated set is a contract violation and
    /// fails with [`ChartError::InvalidMetric`], never an empty chart.
    pub fn from_name(name: &str) -> Result<Metric, ChartError> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| ChartError::InvalidMetric(name.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
