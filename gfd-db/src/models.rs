//! Query result model structs for the economic datasets.
//!
//! All structs derive `Serialize` so they can be passed to Plotly.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// A single (year, value) pair from one country's metric series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// One entry of the exchange-rate date index: the display label as it
/// appears in the source file plus its sortable ISO form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExchangeDate {
    /// Source-file label (e.g. "3-Jan-1994"); the dropdown option value.
    pub label: String,
    /// The same date as "1994-01-03"; lexicographic order is date order.
    pub iso_date: String,
}

/// One choropleth region for a given date: the country, its ISO-3 region
/// code, and the exchange rate of its currency on that date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionValue {
    pub country: String,
    pub code: String,
    pub value: f64,
}

/// A country-code whitelist row as loaded from `country_codes.csv`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryCode {
    /// Country display name (e.g. "Japan").
    pub country: String,
    /// ISO-3 region code (e.g. "JPN").
    pub code: String,
    /// Exchange-table column header for this country's currency
    /// (e.g. "Japanese Yen (JPY)").
    pub currency: String,
}
