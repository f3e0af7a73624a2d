//! Chart builders for the global financial dashboard.
//!
//! This crate turns the immutable data provider into declarative
//! [`Figure`] descriptions:
//!
//! - [`Dashboard::scatter_timeline`] - the animated GDP-growth vs. inflation
//!   scatter with per-year frames, slider, and Play/Pause controls
//! - [`Dashboard::line_chart`] - one line per country for a selected metric
//! - [`Dashboard::choropleth`] - the exchange-rate world map for a selected
//!   date
//!
//! All three are pure functions of (selection, loaded tables): calling one
//! twice with the same input yields a structurally identical figure. Errors
//! are the typed [`ChartError`] taxonomy; the presentation layer maps them
//! to [`Figure::placeholder`] rather than crashing.

pub mod figure;

mod choropleth;
mod lines;
mod timeline;

pub use figure::{Figure, Frame, Layout, Trace};

use gfd_core::error::ChartError;
use gfd_core::{BASE_YEAR, PANEL_COUNTRIES};
use gfd_db::Database;

/// The immutable bundle the handlers read: the loaded database plus the
/// fixed country list and base year.
///
/// Constructed once at startup (after the `load_*` calls) and shared for
/// the whole process lifetime; nothing mutates it afterwards.
#[derive(Clone)]
pub struct Dashboard {
    db: Database,
    countries: Vec<String>,
    base_year: i32,
}

impl Dashboard {
    /// Bundle a loaded database with the standard country list and base year.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            countries: PANEL_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            base_year: BASE_YEAR,
        }
    }

    /// Access the underlying data provider.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// The fixed, ordered country list the timeline and line chart plot.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// The year shown before any animation frame plays.
    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Dropdown option values for the metric selector.
    pub fn metric_options() -> Vec<&'static str> {
        gfd_core::Metric::ALL.iter().map(|m| m.as_str()).collect()
    }

    /// Dropdown option values for the date selector, in the exchange
    /// table's natural order.
    pub fn date_options(&self) -> Result<Vec<String>, ChartError> {
        self.db.query_exchange_dates().map_err(data_err)
    }
}

/// Wrap a provider plumbing failure into the typed taxonomy.
pub(crate) fn data_err(e: anyhow::Error) -> ChartError {
    ChartError::Data(e.to_string())
}
